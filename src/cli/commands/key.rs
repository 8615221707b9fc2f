//! Implementation of the `om1 key` commands.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use std::process::ExitCode;

use crate::adapters::env::ProcessEnv;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::EnvironmentTier;
use crate::infrastructure::credentials::{mask_secret, SecureConfig, DEFAULT_SERVICE};

/// Subcommands of `om1 key`.
#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// Resolve the API key for a service
    Resolve {
        /// Service name; `<SERVICE>_API_KEY` is consulted after `OM_API_KEY`
        #[arg(short, long, default_value = DEFAULT_SERVICE)]
        service: String,

        /// Print the full key instead of a masked prefix
        #[arg(long)]
        reveal: bool,
    },

    /// Check whether a key is usable in the current environment tier
    Validate {
        /// Candidate key
        key: String,

        /// Service name, used in log records
        #[arg(short, long, default_value = DEFAULT_SERVICE)]
        service: String,
    },
}

/// Result of `om1 key resolve`.
#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    /// Service the key was resolved for.
    pub service: String,
    /// Environment tier in effect.
    pub tier: String,
    /// Whether any source produced a key.
    pub found: bool,
    /// The key, masked unless `--reveal` was given.
    pub key: Option<String>,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        match &self.key {
            Some(key) => format!("{} ({}): {key}", self.service, self.tier),
            None => format!("{} ({}): no API key found", self.service, self.tier),
        }
    }
}

/// Result of `om1 key validate`.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// Service named on the command line.
    pub service: String,
    /// Environment tier in effect.
    pub tier: String,
    /// Validation verdict.
    pub valid: bool,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        let verdict = if self.valid { "valid" } else { "invalid" };
        format!("{} ({}): key is {verdict}", self.service, self.tier)
    }
}

/// Execute an `om1 key` subcommand. Exits with 1 when no usable key is found.
pub fn execute(command: KeyCommands, json_mode: bool) -> Result<ExitCode> {
    let env = ProcessEnv;
    let tier = EnvironmentTier::from_env(&env).to_string();

    match command {
        KeyCommands::Resolve { service, reveal } => {
            let key = SecureConfig::resolve_api_key(&env, &service);
            let found = key.is_some();
            let result = ResolveOutput {
                service,
                tier,
                found,
                key: key.map(|k| if reveal { k } else { mask_secret(&k) }),
            };
            output(&result, json_mode);
            Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        KeyCommands::Validate { key, service } => {
            let valid = SecureConfig::validate_api_key(&env, &key, &service);
            output(&ValidateOutput { service, tier, valid }, json_mode);
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}
