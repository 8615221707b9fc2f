//! Action domain models.
//!
//! An action is a closed set of named commands a connector knows how to
//! translate. Values that arrive from an upstream string source and are not
//! part of the set are kept as `Unrecognized` so the connector's default arm
//! can report them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::ActionParseError;

/// Normalize a wire label: lowercase, with spaces and dashes folded to `_`.
fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Facial expressions the face connector can show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FaceAction {
    /// Smile.
    Happy,
    /// Puzzled look.
    Confused,
    /// Attentive, head tilted.
    Curious,
    /// Wide-eyed enthusiasm.
    Excited,
    /// Downcast expression.
    Sad,
    /// Pondering expression.
    Think,
    /// A value outside the known set, kept verbatim.
    Unrecognized(String),
}

impl FaceAction {
    /// Every known face expression, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Happy,
        Self::Confused,
        Self::Curious,
        Self::Excited,
        Self::Sad,
        Self::Think,
    ];

    /// Wire label of the action.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Happy => "happy",
            Self::Confused => "confused",
            Self::Curious => "curious",
            Self::Excited => "excited",
            Self::Sad => "sad",
            Self::Think => "think",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Parse a label, falling back to `Unrecognized` instead of failing.
    pub fn from_label(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "happy" => Self::Happy,
            "confused" => Self::Confused,
            "curious" => Self::Curious,
            "excited" => Self::Excited,
            "sad" => Self::Sad,
            "think" => Self::Think,
            _ => Self::Unrecognized(s.to_string()),
        }
    }

    /// `false` only for `Unrecognized`.
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for FaceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaceAction {
    type Err = ActionParseError;

    /// Strict parse: unknown labels are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_label(s) {
            Self::Unrecognized(raw) => Err(ActionParseError::UnknownAction {
                domain: "face",
                value: raw,
            }),
            action => Ok(action),
        }
    }
}

/// Movement commands for a quadruped base.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementAction {
    /// Hold position.
    StandStill,
    /// Sit down.
    Sit,
    /// Run the dance routine.
    Dance,
    /// Raise a front paw.
    ShakePaw,
    /// Walk forwards at walking pace.
    Walk,
    /// Walk backwards.
    WalkBack,
    /// Move forwards at running pace.
    Run,
    /// Jump in place.
    Jump,
    /// Wag the tail.
    WagTail,
    /// Rotate left in place.
    TurnLeft,
    /// Rotate right in place.
    TurnRight,
    /// Step forwards.
    MoveForwards,
    /// A value outside the known set, kept verbatim.
    Unrecognized(String),
}

impl MovementAction {
    /// Every known movement, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::StandStill,
        Self::Sit,
        Self::Dance,
        Self::ShakePaw,
        Self::Walk,
        Self::WalkBack,
        Self::Run,
        Self::Jump,
        Self::WagTail,
        Self::TurnLeft,
        Self::TurnRight,
        Self::MoveForwards,
    ];

    /// Wire label of the action.
    pub fn as_str(&self) -> &str {
        match self {
            Self::StandStill => "stand_still",
            Self::Sit => "sit",
            Self::Dance => "dance",
            Self::ShakePaw => "shake_paw",
            Self::Walk => "walk",
            Self::WalkBack => "walk_back",
            Self::Run => "run",
            Self::Jump => "jump",
            Self::WagTail => "wag_tail",
            Self::TurnLeft => "turn_left",
            Self::TurnRight => "turn_right",
            Self::MoveForwards => "move_forwards",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Parse a label, falling back to `Unrecognized` instead of failing.
    pub fn from_label(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "stand_still" => Self::StandStill,
            "sit" => Self::Sit,
            "dance" => Self::Dance,
            "shake_paw" => Self::ShakePaw,
            "walk" => Self::Walk,
            "walk_back" => Self::WalkBack,
            "run" => Self::Run,
            "jump" => Self::Jump,
            "wag_tail" => Self::WagTail,
            "turn_left" => Self::TurnLeft,
            "turn_right" => Self::TurnRight,
            "move_forwards" => Self::MoveForwards,
            _ => Self::Unrecognized(s.to_string()),
        }
    }

    /// `false` only for `Unrecognized`.
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for MovementAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementAction {
    type Err = ActionParseError;

    /// Strict parse: unknown labels are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_label(s) {
            Self::Unrecognized(raw) => Err(ActionParseError::UnknownAction {
                domain: "move",
                value: raw,
            }),
            action => Ok(action),
        }
    }
}

// Actions travel as plain labels; deserializing is lenient so an evolving
// upstream action set still reaches the connector's default arm.
macro_rules! label_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::from_label(&raw))
            }
        }
    };
}

label_serde!(FaceAction);
label_serde!(MovementAction);

/// Output interface handed to the face connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceInput {
    /// Expression to show.
    pub action: FaceAction,
}

impl FaceInput {
    /// Wrap a face action.
    pub const fn new(action: FaceAction) -> Self {
        Self { action }
    }
}

/// Output interface handed to the move connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    /// Movement to perform.
    pub action: MovementAction,
}

impl MoveInput {
    /// Wrap a movement action.
    pub const fn new(action: MovementAction) -> Self {
        Self { action }
    }
}

/// Open bag of connector parameters, loaded from the `actions` section of
/// the application config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Parameters by name.
    #[serde(flatten)]
    pub params: HashMap<String, serde_json::Value>,
}

impl ActionConfig {
    /// Empty parameter bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style parameter insertion.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.params.get(name)
    }
}
