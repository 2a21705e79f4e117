// HTTP client utilities
use crate::domain::error::ApiError;
use crate::infrastructure::config::ClientSettings;
use reqwest::Client;
use std::time::Duration;

/// Build the underlying reqwest client for the given settings.
///
/// Default headers are merged into each request at send time, so they
/// reach the wire even when a request hook rebuilds the header map.
pub fn create_client(settings: &ClientSettings) -> Result<Client, ApiError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(settings.timeout)
        .default_headers(settings.default_headers.clone())
        .user_agent(concat!("shorturl/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
