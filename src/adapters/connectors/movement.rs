//! Movement connector for the quadruped base.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::adapters::sink::LogSink;
use crate::domain::models::{ActionConfig, CommandMessage, MoveInput, MovementAction};
use crate::domain::ports::{ActionConnector, CommandSink};

/// Message key for movement commands.
pub const MOVE_DOMAIN: &str = "move";

/// Display string for a movement, `None` for unrecognized values.
pub const fn move_command(action: &MovementAction) -> Option<&'static str> {
    match action {
        MovementAction::StandStill => Some("stand still"),
        MovementAction::Sit => Some("sit"),
        MovementAction::Dance => Some("dance"),
        MovementAction::ShakePaw => Some("shake paw"),
        MovementAction::Walk => Some("walk"),
        MovementAction::WalkBack => Some("walk back"),
        MovementAction::Run => Some("run"),
        MovementAction::Jump => Some("jump"),
        MovementAction::WagTail => Some("wag tail"),
        MovementAction::TurnLeft => Some("turn left"),
        MovementAction::TurnRight => Some("turn right"),
        MovementAction::MoveForwards => Some("move forwards"),
        MovementAction::Unrecognized(_) => None,
    }
}

/// Links the move action with the Unitree SDK over ROS2.
pub struct MoveRos2Connector {
    config: ActionConfig,
    sink: Arc<dyn CommandSink>,
}

impl MoveRos2Connector {
    /// Connector that logs its commands.
    pub fn new(config: ActionConfig) -> Self {
        Self::with_sink(config, Arc::new(LogSink))
    }

    /// Connector that delivers to `sink`.
    pub fn with_sink(config: ActionConfig, sink: Arc<dyn CommandSink>) -> Self {
        Self { config, sink }
    }
}

#[async_trait]
impl ActionConnector<MoveInput> for MoveRos2Connector {
    fn name(&self) -> &'static str {
        "move_ros2"
    }

    fn config(&self) -> &ActionConfig {
        &self.config
    }

    async fn connect(&self, input: MoveInput) {
        match move_command(&input.action) {
            Some(command) => self.sink.send(&CommandMessage::new(MOVE_DOMAIN, command)),
            // Logged, never raised.
            None => info!(
                connector = self.name(),
                action = %input.action,
                "Other move type"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::RecordingSink;

    #[test]
    fn test_every_movement_has_a_command() {
        for action in MovementAction::ALL {
            let command = move_command(&action).expect("known action must map");
            assert_eq!(command, action.as_str().replace('_', " "));
        }
    }

    #[tokio::test]
    async fn test_turn_commands() {
        let sink = Arc::new(RecordingSink::new());
        let connector = MoveRos2Connector::with_sink(ActionConfig::new(), sink.clone());

        connector.connect(MoveInput::new(MovementAction::TurnLeft)).await;
        connector.connect(MoveInput::new(MovementAction::TurnRight)).await;
        connector.connect(MoveInput::new(MovementAction::MoveForwards)).await;

        let commands: Vec<String> = sink.messages().into_iter().map(|m| m.command).collect();
        assert_eq!(commands, ["turn left", "turn right", "move forwards"]);
    }
}
