use crate::domain::error::ApiError;
use crate::infrastructure::config::ClientSettings;
use crate::infrastructure::network::client::ApiClient;
use once_cell::sync::OnceCell;

static SHARED_CLIENT: OnceCell<ApiClient> = OnceCell::new();

/// Install an explicitly configured client as the process-wide instance.
///
/// Fails if the shared client already exists.
pub fn init_shared(settings: ClientSettings) -> Result<&'static ApiClient, ApiError> {
    let client = ApiClient::new(settings)?;
    SHARED_CLIENT
        .set(client)
        .map_err(|_| ApiError::Config("Shared API client already initialized".to_string()))?;
    shared()
}

/// The process-wide client, built from the environment on first use.
pub fn shared() -> Result<&'static ApiClient, ApiError> {
    SHARED_CLIENT.get_or_try_init(|| ApiClient::new(ClientSettings::from_env()?))
}
