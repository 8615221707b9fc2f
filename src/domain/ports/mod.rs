//! Port trait definitions (Hexagonal Architecture)
//!
//! - `ActionConnector`: translate an action into a middleware message
//! - `CommandSink`: deliver a translated message
//! - `EnvSource`: read environment variables
//!
//! Adapters live in [`crate::adapters`].

pub mod action_connector;
pub mod command_sink;
pub mod env_source;

pub use action_connector::ActionConnector;
pub use command_sink::CommandSink;
pub use env_source::EnvSource;
