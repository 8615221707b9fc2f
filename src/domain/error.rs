//! Typed errors raised by configuration lookup and action parsing.

use thiserror::Error;

/// Configuration errors: missing mandatory values and invalid settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value resolved to empty.
    #[error("Required configuration value missing: {key}")]
    MissingRequired {
        /// Upper-cased variable name that was looked up.
        key: String,
    },

    /// Log level outside trace/debug/info/warn/error.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Log format other than json or pretty.
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Rotation policy other than daily, hourly or never.
    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Errors parsing an action label from user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    /// Label is not in the known set for the domain.
    #[error("Unknown {domain} action: {value}")]
    UnknownAction {
        /// `face` or `move`.
        domain: &'static str,
        /// Label as given.
        value: String,
    },
}
