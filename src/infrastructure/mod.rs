//! Infrastructure layer module
//!
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Credentials management (environment-backed API keys)

pub mod config;
pub mod credentials;
pub mod logging;
