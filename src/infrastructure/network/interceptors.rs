use crate::domain::error::ApiError;
use crate::domain::traits::{RequestInterceptor, ResponseInterceptor};
use async_trait::async_trait;
use reqwest::{Request, StatusCode};
use tracing::error;

pub const ENDPOINT_NOT_FOUND: &str = "API endpoint not found";
pub const SERVER_ERROR: &str = "Server error";

/// Request hook that forwards the request untouched.
///
/// Authentication headers go here once the service requires them.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

#[async_trait]
impl RequestInterceptor for Passthrough {
    async fn on_request(&self, request: Request) -> Result<Request, ApiError> {
        Ok(request)
    }
}

/// Response hook that logs a fixed diagnostic for 404 and 5xx failures and
/// hands every error back unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusLogger;

/// Which fixed diagnostic a failure status maps to, if any.
pub fn diagnostic_for(status: StatusCode) -> Option<&'static str> {
    match status.as_u16() {
        404 => Some(ENDPOINT_NOT_FOUND),
        s if s >= 500 => Some(SERVER_ERROR),
        _ => None,
    }
}

#[async_trait]
impl ResponseInterceptor for StatusLogger {
    async fn on_error(&self, err: ApiError) -> ApiError {
        if let Some(status) = err.status() {
            if let Some(message) = diagnostic_for(status) {
                error!(status = status.as_u16(), "{}", message);
            }
        }
        err
    }
}
