//! Message payload produced by action connectors.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A single `{<domain>: <command>}` record bound for the robot middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMessage {
    /// Action domain, e.g. `face` or `move`.
    pub domain: &'static str,
    /// Display string of the command.
    pub command: String,
}

impl CommandMessage {
    /// Build a message for `domain`.
    pub fn new(domain: &'static str, command: impl Into<String>) -> Self {
        Self {
            domain,
            command: command.into(),
        }
    }
}

impl Serialize for CommandMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.domain, &self.command)?;
        map.end()
    }
}

impl fmt::Display for CommandMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'{}': '{}'}}", self.domain, self.command)
    }
}
