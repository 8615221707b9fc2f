//! OM1 connectors
//!
//! Thin adapters for the OM1 robot-control stack:
//!
//! - **Action connectors** translate a typed action (a face expression, a
//!   movement) into the `{<domain>: <command>}` message the ROS2 middleware
//!   expects and hand it to a [`CommandSink`].
//! - **Secure configuration** resolves API keys from the environment with a
//!   fixed priority order and rejects placeholder keys in production.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): action and environment models, ports
//! - **Adapters** (`adapters`): connectors, environment readers, sinks
//! - **Infrastructure Layer** (`infrastructure`): credentials, config, logging
//! - **CLI Layer** (`cli`): the `om1` binary
//!
//! # Example
//!
//! ```
//! use om1_connectors::{EnvSnapshot, SecureConfig};
//!
//! let env = EnvSnapshot::new().with("ENVIRONMENT", "development");
//! assert_eq!(
//!     SecureConfig::resolve_api_key(&env, "openmind").as_deref(),
//!     Some("openmind_free")
//! );
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::{
    EnvSnapshot, FaceRos2Connector, LogSink, MoveRos2Connector, ProcessEnv, RecordingSink,
};
pub use domain::models::{
    ActionConfig, AppConfig, CommandMessage, EnvironmentTier, FaceAction, FaceInput,
    LoggingConfig, MoveInput, MovementAction,
};
pub use domain::ports::{ActionConnector, CommandSink, EnvSource};
pub use domain::{ActionParseError, ConfigError};
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::credentials::SecureConfig;
