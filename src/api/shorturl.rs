use crate::domain::error::ApiError;
use crate::domain::model::{
    ClickListResponse, HealthResponse, ServiceInfo, ShortenRequest, ShortenResponse,
    StatsResponse,
};
use crate::infrastructure::network::ApiClient;

/// Longest custom code the service accepts.
pub const MAX_CUSTOM_CODE_LEN: usize = 16;

/// Typed calls against the short URL service.
#[derive(Debug, Clone)]
pub struct ShortUrlApi {
    client: ApiClient,
}

impl ShortUrlApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// `POST /api/shorten`
    pub async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ApiError> {
        if request.url.trim().is_empty() {
            return Err(ApiError::InvalidInput("URL must not be empty".to_string()));
        }
        if let Some(code) = &request.custom_code {
            validate_custom_code(code)?;
        }

        self.client.post_json("/api/shorten", request).await
    }

    /// `GET /api/stats/{code}`
    pub async fn stats(&self, short_code: &str) -> Result<StatsResponse, ApiError> {
        validate_short_code(short_code)?;
        self.client
            .get_json(&format!("/api/stats/{}", short_code))
            .await
    }

    /// `GET /api/clicks/{code}`, newest first, capped by the service.
    pub async fn clicks(&self, short_code: &str) -> Result<ClickListResponse, ApiError> {
        validate_short_code(short_code)?;
        self.client
            .get_json(&format!("/api/clicks/{}", short_code))
            .await
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.client.get_json("/health").await
    }

    pub async fn service_info(&self) -> Result<ServiceInfo, ApiError> {
        self.client.get_json("/").await
    }
}

fn validate_custom_code(code: &str) -> Result<(), ApiError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LEN {
        return Err(ApiError::InvalidInput(format!(
            "Custom code must be 1-{} characters",
            MAX_CUSTOM_CODE_LEN
        )));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ApiError::InvalidInput(format!(
            "Custom code '{}' must be alphanumeric",
            code
        )));
    }
    Ok(())
}

// Must stay a single path segment
fn validate_short_code(code: &str) -> Result<(), ApiError> {
    if code.is_empty() {
        return Err(ApiError::InvalidInput(
            "Short code must not be empty".to_string(),
        ));
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ApiError::InvalidInput(format!(
            "Invalid short code: {}",
            code
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_code_rules() {
        assert!(validate_custom_code("abc123").is_ok());
        assert!(validate_custom_code("a".repeat(16).as_str()).is_ok());
        assert!(validate_custom_code("a".repeat(17).as_str()).is_err());
        assert!(validate_custom_code("").is_err());
        assert!(validate_custom_code("has-dash").is_err());
    }

    #[test]
    fn short_code_rules() {
        assert!(validate_short_code("Ab3_x-9").is_ok());
        assert!(validate_short_code("").is_err());
        assert!(validate_short_code("../health").is_err());
        assert!(validate_short_code("a?b").is_err());
    }
}
