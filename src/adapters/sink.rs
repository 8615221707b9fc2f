//! Command sink adapters.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

use crate::domain::models::CommandMessage;
use crate::domain::ports::CommandSink;

/// Emits each message as one structured `info` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl CommandSink for LogSink {
    fn send(&self, message: &CommandMessage) {
        info!(
            domain = message.domain,
            command = %message.command,
            payload = %message,
            "SendThisToROS2"
        );
    }
}

/// Keeps every delivered message in memory, optionally passing it on.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<CommandMessage>>,
    forward_to: Option<Arc<dyn CommandSink>>,
}

impl RecordingSink {
    /// Sink that only records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that records and then delivers each message to `inner`.
    pub fn forwarding(inner: Arc<dyn CommandSink>) -> Self {
        Self {
            messages: Mutex::default(),
            forward_to: Some(inner),
        }
    }

    /// Messages delivered so far, oldest first.
    pub fn messages(&self) -> Vec<CommandMessage> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of messages delivered so far.
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been delivered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for RecordingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingSink")
            .field("messages", &self.len())
            .field("forwarding", &self.forward_to.is_some())
            .finish()
    }
}

impl CommandSink for RecordingSink {
    fn send(&self, message: &CommandMessage) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());
        if let Some(inner) = &self.forward_to {
            inner.send(message);
        }
    }
}
