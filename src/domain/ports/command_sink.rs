//! Command sink port - where connector messages are delivered.

use crate::domain::models::CommandMessage;

/// Destination for connector output.
///
/// Stands in for the robotics middleware publisher. The default adapter
/// writes one structured log record per message.
pub trait CommandSink: Send + Sync {
    /// Deliver a single message.
    fn send(&self, message: &CommandMessage);
}
