use crate::infrastructure::config::{BuildMode, ClientOptions};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shorturl")]
#[command(about = "Command-line client for the short URL service.")]
#[command(version)]
pub struct Cli {
    /// API base URL (overrides SHORTURL_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Build mode used when no API URL is set
    #[arg(long, value_enum, global = true)]
    pub mode: Option<BuildMode>,

    /// Origin used as base URL in production mode
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a short URL
    Shorten {
        /// URL to shorten
        url: String,

        /// Custom short code (alphanumeric, at most 16 characters)
        #[arg(short = 'c', long)]
        code: Option<String>,
    },

    /// Show click statistics for a short code
    Stats { code: String },

    /// List recent clicks for a short code
    Clicks { code: String },

    /// Check service health
    Health,

    /// Show service information
    Info,

    /// Print the resolved client configuration
    Config,
}

impl Cli {
    /// Flags win over whatever the environment and config file said.
    pub fn apply(&self, mut options: ClientOptions) -> ClientOptions {
        if let Some(api_url) = &self.api_url {
            options.api_url = Some(api_url.clone());
        }
        if let Some(mode) = self.mode {
            options.mode = mode;
        }
        if let Some(origin) = &self.origin {
            options.origin = Some(origin.clone());
        }
        options
    }
}
