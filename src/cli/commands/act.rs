//! Implementation of the `om1 face` and `om1 move` commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::process::ExitCode;
use std::sync::Arc;

use crate::adapters::connectors::{FaceRos2Connector, MoveRos2Connector, FACE_DOMAIN, MOVE_DOMAIN};
use crate::adapters::sink::{LogSink, RecordingSink};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{
    ActionConfig, AppConfig, CommandMessage, FaceAction, FaceInput, MoveInput, MovementAction,
};
use crate::domain::ports::{ActionConnector, CommandSink};

/// Arguments shared by `om1 face` and `om1 move`.
#[derive(Args, Debug)]
pub struct ActArgs {
    /// Action label, e.g. `happy` or `shake_paw`
    pub action: String,

    /// Reject labels outside the known set instead of passing them through
    #[arg(long)]
    pub strict: bool,
}

/// Result of running one connector.
#[derive(Debug, Serialize)]
pub struct ActOutput {
    /// Connector name, `face_ros2` or `move_ros2`.
    pub connector: &'static str,
    /// Action label as parsed.
    pub action: String,
    /// Whether the label is in the connector's known set.
    pub recognized: bool,
    /// Message the connector delivered to its sink, if any.
    pub message: Option<CommandMessage>,
}

impl CommandOutput for ActOutput {
    fn to_human(&self) -> String {
        match &self.message {
            Some(message) => format!("{}: sent {message}", self.connector),
            None => format!("{}: ignored unrecognized action '{}'", self.connector, self.action),
        }
    }
}

/// Runs the face connector once, delivering to `sink`.
pub async fn dispatch_face(
    action: FaceAction,
    config: ActionConfig,
    sink: Arc<dyn CommandSink>,
) -> ActOutput {
    let recorder = Arc::new(RecordingSink::forwarding(sink));
    let connector = FaceRos2Connector::with_sink(config, recorder.clone());
    let label = action.to_string();
    let recognized = action.is_recognized();

    connector.connect(FaceInput::new(action)).await;

    ActOutput {
        connector: connector.name(),
        action: label,
        recognized,
        message: recorder.messages().into_iter().next(),
    }
}

/// Runs the movement connector once, delivering to `sink`.
pub async fn dispatch_move(
    action: MovementAction,
    config: ActionConfig,
    sink: Arc<dyn CommandSink>,
) -> ActOutput {
    let recorder = Arc::new(RecordingSink::forwarding(sink));
    let connector = MoveRos2Connector::with_sink(config, recorder.clone());
    let label = action.to_string();
    let recognized = action.is_recognized();

    connector.connect(MoveInput::new(action)).await;

    ActOutput {
        connector: connector.name(),
        action: label,
        recognized,
        message: recorder.messages().into_iter().next(),
    }
}

/// Execute `om1 face`.
pub async fn execute_face(args: ActArgs, config: &AppConfig, json_mode: bool) -> Result<ExitCode> {
    let action = if args.strict {
        args.action.parse::<FaceAction>()?
    } else {
        FaceAction::from_label(&args.action)
    };

    let result = dispatch_face(action, config.action(FACE_DOMAIN), Arc::new(LogSink)).await;
    output(&result, json_mode);
    Ok(ExitCode::SUCCESS)
}

/// Execute `om1 move`.
pub async fn execute_move(args: ActArgs, config: &AppConfig, json_mode: bool) -> Result<ExitCode> {
    let action = if args.strict {
        args.action.parse::<MovementAction>()?
    } else {
        MovementAction::from_label(&args.action)
    };

    let result = dispatch_move(action, config.action(MOVE_DOMAIN), Arc::new(LogSink)).await;
    output(&result, json_mode);
    Ok(ExitCode::SUCCESS)
}
