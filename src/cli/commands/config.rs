//! Implementation of the `om1 config` commands.

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use std::process::ExitCode;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::AppConfig;
use crate::infrastructure::credentials::SecureConfig;

/// Subcommands of `om1 config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Read a value from the environment; the name is upper-cased
    Get {
        /// Configuration key
        key: String,

        /// Value used when the variable is unset
        #[arg(short, long, default_value = "")]
        default: String,

        /// Allow an empty result instead of failing
        #[arg(long)]
        optional: bool,
    },

    /// Print the effective application configuration
    Show,
}

/// Result of `om1 config get`.
#[derive(Debug, Serialize)]
pub struct GetOutput {
    /// Upper-cased variable name.
    pub key: String,
    /// Resolved value.
    pub value: String,
}

impl CommandOutput for GetOutput {
    fn to_human(&self) -> String {
        self.value.clone()
    }
}

/// Result of `om1 config show`: the effective configuration.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ShowOutput(pub AppConfig);

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.0).unwrap_or_default()
    }
}

/// Execute an `om1 config` subcommand.
pub fn execute(
    command: ConfigCommands,
    config: &AppConfig,
    json_mode: bool,
) -> Result<ExitCode> {
    match command {
        ConfigCommands::Get {
            key,
            default,
            optional,
        } => {
            let value = SecureConfig::config_value(&key, &default, !optional)
                .with_context(|| format!("Cannot read configuration value {key}"))?;
            output(&GetOutput { key, value }, json_mode);
        }
        ConfigCommands::Show => output(&ShowOutput(config.clone()), json_mode),
    }
    Ok(ExitCode::SUCCESS)
}
