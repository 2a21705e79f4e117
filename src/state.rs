use crate::api::ShortUrlApi;
use crate::domain::error::ApiError;
use crate::infrastructure::config::{ClientOptions, ClientSettings, Config};
use crate::infrastructure::network::init_shared;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub settings: ClientSettings,
    pub api: ShortUrlApi,
}

impl AppState {
    /// Resolve the client settings and install them as the shared client.
    pub fn new(config: Config, options: &ClientOptions) -> Result<Self, ApiError> {
        let settings = ClientSettings::resolve(options)?;
        let client = init_shared(settings.clone())?.clone();

        Ok(Self {
            config: Arc::new(config),
            settings,
            api: ShortUrlApi::new(client),
        })
    }
}
