//! Face expression connector.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::adapters::sink::LogSink;
use crate::domain::models::{ActionConfig, CommandMessage, FaceAction, FaceInput};
use crate::domain::ports::{ActionConnector, CommandSink};

/// Message key for face commands.
pub const FACE_DOMAIN: &str = "face";

/// Display string for a face expression, `None` for unrecognized values.
pub const fn face_command(action: &FaceAction) -> Option<&'static str> {
    match action {
        FaceAction::Happy => Some("happy"),
        FaceAction::Confused => Some("confused"),
        FaceAction::Curious => Some("curious"),
        FaceAction::Excited => Some("excited"),
        FaceAction::Sad => Some("sad"),
        FaceAction::Think => Some("think"),
        FaceAction::Unrecognized(_) => None,
    }
}

/// Links the face action with ROS2.
pub struct FaceRos2Connector {
    config: ActionConfig,
    sink: Arc<dyn CommandSink>,
}

impl FaceRos2Connector {
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
impl ActionConnector<FaceInput> for FaceRos2Connector {
    fn name(&self) -> &'static str {
        "face_ros2"
    }

    fn config(&self) -> &ActionConfig {
        &self.config
    }

    async fn connect(&self, input: FaceInput) {
        match face_command(&input.action) {
            Some(command) => self.sink.send(&CommandMessage::new(FACE_DOMAIN, command)),
            None => info!(
                connector = self.name(),
                action = %input.action,
                "Unknown face type"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::RecordingSink;

    #[test]
    fn test_face_table() {
        let expected = ["happy", "confused", "curious", "excited", "sad", "think"];
        for (action, display) in FaceAction::ALL.iter().zip(expected) {
            assert_eq!(face_command(action), Some(display));
        }
        assert_eq!(face_command(&FaceAction::Unrecognized("wink".into())), None);
    }

    #[tokio::test]
    async fn test_connect_sends_one_message() {
        let sink = Arc::new(RecordingSink::new());
        let connector = FaceRos2Connector::with_sink(ActionConfig::new(), sink.clone());

        connector.connect(FaceInput::new(FaceAction::Curious)).await;

        assert_eq!(sink.messages(), vec![CommandMessage::new("face", "curious")]);
    }

    #[tokio::test]
    async fn test_unknown_face_is_dropped() {
        let sink = Arc::new(RecordingSink::new());
        let connector = FaceRos2Connector::with_sink(ActionConfig::new(), sink.clone());

        connector
            .connect(FaceInput::new(FaceAction::Unrecognized("wink".into())))
            .await;

        assert!(sink.is_empty());
    }
}
