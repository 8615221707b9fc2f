//! Action connectors bound for the ROS2 middleware.
//!
//! Each connector owns a dispatch table from its action enum to the command
//! string the robot expects. Publishing is delegated to a [`CommandSink`];
//! by default that is [`LogSink`], which logs the payload in place of a real
//! publisher.
//!
//! [`CommandSink`]: crate::domain::ports::CommandSink
//! [`LogSink`]: crate::adapters::sink::LogSink

pub mod face;
pub mod movement;

pub use face::{face_command, FaceRos2Connector, FACE_DOMAIN};
pub use movement::{move_command, MoveRos2Connector, MOVE_DOMAIN};
