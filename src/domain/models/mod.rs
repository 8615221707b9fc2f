//! Domain models.

pub mod action;
pub mod command;
pub mod config;
pub mod environment;

pub use action::{ActionConfig, FaceAction, FaceInput, MoveInput, MovementAction};
pub use command::CommandMessage;
pub use config::{AppConfig, LoggingConfig};
pub use environment::EnvironmentTier;
