//! `om1` CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use om1_connectors::cli::commands::{act, config, key};
use om1_connectors::cli::{handle_error, Cli, Commands};
use om1_connectors::infrastructure::config::ConfigLoader;
use om1_connectors::infrastructure::logging::{LogConfig, LoggerImpl};
use om1_connectors::{AppConfig, ProcessEnv};

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing so `.env` can supply OM1_CONFIG; real process variables win
    let dotenv_path = ProcessEnv::load_dotenv();
    let cli = Cli::parse();

    let app_config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => return handle_error(&err, cli.json),
    };

    let _logger = match LogConfig::try_from(&app_config.logging)
        .map_err(anyhow::Error::from)
        .and_then(|log_config| LoggerImpl::init(&log_config))
    {
        Ok(logger) => logger,
        Err(err) => return handle_error(&err, cli.json),
    };

    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }

    let result = match cli.command {
        Commands::Face(args) => act::execute_face(args, &app_config, cli.json).await,
        Commands::Move(args) => act::execute_move(args, &app_config, cli.json).await,
        Commands::Key(command) => key::execute(command, cli.json),
        Commands::Config(command) => config::execute(command, &app_config, cli.json),
    };

    result.unwrap_or_else(|err| handle_error(&err, cli.json))
}
