//! Domain layer: action and credential models plus the ports adapters implement.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{ActionParseError, ConfigError};
