use crate::domain::error::ApiError;
use crate::domain::model::ShortenRequest;
use crate::interfaces::cli::Command;
use crate::presentation::render;
use crate::presentation::theme::Theme;
use crate::state::AppState;
use serde::Serialize;

/// Run one CLI command and return what should be printed.
pub async fn run(state: &AppState, command: &Command, json: bool) -> Result<String, ApiError> {
    let theme = Theme::default();

    match command {
        Command::Shorten { url, code } => {
            let mut request = ShortenRequest::new(url.as_str());
            if let Some(code) = code {
                request = request.with_custom_code(code.as_str());
            }
            let result = state.api.shorten(&request).await?;
            tracing::info!(short_code = %result.short_code, "short URL created");
            output(json, &result, || render::format_shorten(&result, &theme))
        }
        Command::Stats { code } => {
            let stats = state.api.stats(code).await?;
            output(json, &stats, || render::format_stats(&stats, &theme))
        }
        Command::Clicks { code } => {
            let list = state.api.clicks(code).await?;
            output(json, &list, || render::format_clicks(&list, &theme))
        }
        Command::Health => {
            let health = state.api.health().await?;
            output(json, &health, || render::format_health(&health, &theme))
        }
        Command::Info => {
            let info = state.api.service_info().await?;
            output(json, &info, || render::format_info(&info, &theme))
        }
        Command::Config => {
            let view = SettingsView::from(state);
            output(json, &view, || render::format_settings(&state.settings, &theme))
        }
    }
}

fn output<T: Serialize>(
    json: bool,
    value: &T,
    human: impl FnOnce() -> String,
) -> Result<String, ApiError> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
    } else {
        Ok(human())
    }
}

#[derive(Serialize)]
struct SettingsView {
    base_url: String,
    timeout_ms: u128,
    headers: Vec<(String, String)>,
}

impl From<&AppState> for SettingsView {
    fn from(state: &AppState) -> Self {
        Self {
            base_url: state.settings.base_url.clone(),
            timeout_ms: state.settings.timeout.as_millis(),
            headers: state
                .settings
                .default_headers
                .iter()
                .map(|(k, v)| {
                    (
                        k.to_string(),
                        v.to_str().unwrap_or_default().to_string(),
                    )
                })
                .collect(),
        }
    }
}
