use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {}ms", .timeout.as_millis())]
    Timeout {
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request failed with status {}", .0.status)]
    Status(Box<ErrorResponse>),

    #[error("Request interceptor error: {0}")]
    Interceptor(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ApiError {
    /// HTTP status attached to the failure, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status(response) => Some(response.status),
            ApiError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// The original non-2xx response.
    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            ApiError::Status(response) => Some(&**response),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            ApiError::Timeout { .. } => true,
            ApiError::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Human readable message, preferring the `{"error": ...}` text the
    /// service puts in its error bodies.
    pub fn message(&self) -> String {
        self.response()
            .and_then(ErrorResponse::service_message)
            .unwrap_or_else(|| self.to_string())
    }
}

/// A completed response whose status was outside the 2xx range.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[derive(Deserialize)]
struct ServiceErrorBody {
    error: String,
}

impl ErrorResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn service_message(&self) -> Option<String> {
        serde_json::from_slice::<ServiceErrorBody>(&self.body)
            .ok()
            .map(|b| b.error)
    }
}
