//! Outcome messages returned by the command interface.

use super::Action;
use serde::Serialize;
use std::fmt;

pub const NOT_PLACED: &str =
    "The robot must be placed before you can move it. Try 'PLACE 1,1,NORTH'.";

pub const INVALID_MOVE: &str =
    "That move is invalid as it would move the robot outside the board.";

pub const INVALID_COMMAND: &str = "Invalid Command - Only the PLACE, LEFT, RIGHT, MOVE, and REPORT commands are allowed. For the PLACE command, X&Y must be between 1-5 inclusive.";

pub const SUCCESS_MSG: &str = "Success.";

/// Result of running one textual command.
///
/// Every input line maps to exactly one outcome; none of them is an error.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "kebab-case")]
pub enum Outcome {
    /// The line did not match the grammar.
    InvalidCommand,
    /// A non-PLACE command arrived before the robot was placed.
    NotPlaced,
    /// The board rejected the placement or step.
    InvalidMove,
    /// The command was applied.
    Success(Action),
    /// Status line from REPORT.
    Report(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Report(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCommand => f.write_str(INVALID_COMMAND),
            Self::NotPlaced => f.write_str(NOT_PLACED),
            Self::InvalidMove => f.write_str(INVALID_MOVE),
            Self::Success(action) => write!(f, "{action} {SUCCESS_MSG}"),
            Self::Report(status) => f.write_str(status),
        }
    }
}
