// Main entry point
use clap::Parser;
use colored::Colorize;
use shorturl_client::application;
use shorturl_client::infrastructure::config::{generate_config_sample, load_config};
use shorturl_client::infrastructure::logging::init_logging;
use shorturl_client::interfaces::cli::Cli;
use shorturl_client::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let config = load_config()?;

    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        generate_config_sample()?;
        return Ok(());
    }

    let Some(command) = cli.command.as_ref() else {
        eprintln!("{}", "Please provide a command, see --help".red());
        std::process::exit(1);
    };

    // flags > environment > config file
    let options = cli.apply(config.api.clone().with_env()?);
    let state = AppState::new(config, &options)?;

    tokio::select! {
        result = application::commands::run(&state, command, cli.json) => {
            match result {
                Ok(output) => print!("{}", output),
                Err(e) => {
                    eprintln!("{} {}", "✘".red(), e.message().red());
                    std::process::exit(1);
                }
            }
        }
        Ok(()) = shutdown_rx => {
            eprintln!("\nInterrupted");
        }
    }

    Ok(())
}
