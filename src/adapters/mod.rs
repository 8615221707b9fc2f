//! Adapters implementing the domain ports.

pub mod connectors;
pub mod env;
pub mod sink;

pub use connectors::{FaceRos2Connector, MoveRos2Connector};
pub use env::{EnvSnapshot, ProcessEnv};
pub use sink::{LogSink, RecordingSink};
