use crate::domain::error::ApiError;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Base URL used outside production when no override is given.
pub const DEFAULT_DEV_BASE_URL: &str = "http://localhost:8080";

/// Per-request timeout applied to every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

pub const API_URL_ENV: &str = "SHORTURL_API_URL";
pub const MODE_ENV: &str = "SHORTURL_MODE";
pub const ORIGIN_ENV: &str = "SHORTURL_ORIGIN";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ClientOptions,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    #[serde(alias = "dev")]
    #[value(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    #[value(alias = "prod")]
    Production,
}

impl FromStr for BuildMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(ApiError::Config(format!("Unknown build mode: {}", other))),
        }
    }
}

/// Inputs of base URL resolution.
///
/// `origin` stands in for the page origin a browser would provide; on a
/// plain host it has to be passed explicitly.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub api_url: Option<String>,
    #[serde(default)]
    pub mode: BuildMode,
    pub origin: Option<String>,
}

impl ClientOptions {
    pub fn from_env() -> Result<Self, ApiError> {
        Self::default().with_env()
    }

    /// Overlay the `SHORTURL_*` environment variables on top of `self`.
    pub fn with_env(mut self) -> Result<Self, ApiError> {
        if let Some(api_url) = env_value(API_URL_ENV) {
            self.api_url = Some(api_url);
        }
        if let Some(mode) = env_value(MODE_ENV) {
            self.mode = mode.parse()?;
        }
        if let Some(origin) = env_value(ORIGIN_ENV) {
            self.origin = Some(origin);
        }
        Ok(self)
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Resolve the base URL every relative path is joined onto.
///
/// Order: a non-empty override verbatim, then the origin in production,
/// then [`DEFAULT_DEV_BASE_URL`]. Production without an origin falls back
/// to the development default.
pub fn resolve_base_url(options: &ClientOptions) -> Result<String, ApiError> {
    if let Some(api_url) = non_empty(&options.api_url) {
        // Url::parse trims, the returned string must parse as is
        if api_url != api_url.trim() {
            return Err(ApiError::Config(format!(
                "API URL '{}' has surrounding whitespace",
                api_url
            )));
        }
        let url = parse_http_url(api_url)?;
        tracing::debug!(base_url = %url, "using API URL override");
        return Ok(api_url.to_string());
    }

    if options.mode == BuildMode::Production {
        match non_empty(&options.origin) {
            Some(origin) => {
                let url = parse_http_url(origin)?;
                return Ok(url.origin().ascii_serialization());
            }
            None => warn!(
                "production mode without {} or {}, falling back to {}",
                API_URL_ENV, ORIGIN_ENV, DEFAULT_DEV_BASE_URL
            ),
        }
    }

    Ok(DEFAULT_DEV_BASE_URL.to_string())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_http_url(raw: &str) -> Result<Url, ApiError> {
    let url =
        Url::parse(raw).map_err(|e| ApiError::Config(format!("Invalid URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ApiError::Config(format!(
            "Unsupported URL scheme '{}' in '{}'",
            scheme, raw
        ))),
    }
}

pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Immutable configuration of the shared client.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub default_headers: HeaderMap,
}

impl ClientSettings {
    pub fn resolve(options: &ClientOptions) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: resolve_base_url(options)?,
            timeout: REQUEST_TIMEOUT,
            default_headers: default_headers(),
        })
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Self::resolve(&ClientOptions::from_env()?)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("shorturl").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, ApiError> {
    Ok(toml::from_str::<Config>(content)?)
}

pub fn load_config() -> Result<Config, ApiError> {
    if let Some(path) = get_config_path() {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match parse_config(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), ApiError> {
    let path = get_config_path()
        .ok_or_else(|| ApiError::Config("Cannot determine config directory".to_string()))?;

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let sample = Config {
        api: ClientOptions {
            api_url: Some(DEFAULT_DEV_BASE_URL.to_string()),
            ..ClientOptions::default()
        },
        logging: Logging::default(),
    };
    let toml_content = toml::to_string_pretty(&sample)
        .map_err(|e| ApiError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(&path, toml_content)
        .map_err(|e| ApiError::Config(format!("Failed to write config file: {}", e)))?;
    println!("Generated config file at: {}", path.display());

    Ok(())
}
