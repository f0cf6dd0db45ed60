//! Textual commands and their outcomes.
//!
//! A raw line goes through two stages:
//!
//! 1. [`parse`] normalizes it and recognizes the grammar, producing a
//!    [`Command`] or nothing.
//! 2. The robot dispatches the command and reports an [`Outcome`].
//!
//! ```text
//! MOVE
//! LEFT
//! RIGHT
//! REPORT
//! PLACE <x>,<y>,<DIRECTION>      x, y in 1..=5
//! ```

pub mod error;
mod outcome;
mod parser;

pub use error::CommandError;
pub use outcome::{Outcome, INVALID_COMMAND, INVALID_MOVE, NOT_PLACED, SUCCESS_MSG};
pub use parser::parse;

use crate::core::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a command, as it appears in success messages.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Place,
    Move,
    Left,
    Right,
    Report,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Self::Place => "PLACE",
            Self::Move => "MOVE",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Report => "REPORT",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arguments of a PLACE command.
///
/// Coordinates are not range-checked here; that is the robot's job.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PlaceArgs {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
}

impl PlaceArgs {
    /// Load arguments from a split `x,y,DIRECTION` list.
    ///
    /// A missing list, the wrong number of items, non-numeric coordinates
    /// or an unknown direction are errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toy_robot::command::{CommandError, PlaceArgs};
    /// use toy_robot::core::Direction;
    ///
    /// let args = PlaceArgs::from_args(Some(&["2", "3", "EAST"][..])).unwrap();
    /// assert_eq!((args.x, args.y, args.facing), (2, 3, Direction::East));
    ///
    /// assert_eq!(PlaceArgs::from_args(None), Err(CommandError::PlaceArgsMissing));
    /// assert_eq!(
    ///     PlaceArgs::from_args(Some(&["2", "3"][..])),
    ///     Err(CommandError::PlaceArgsInvalid)
    /// );
    /// ```
    pub fn from_args(args: Option<&[&str]>) -> Result<Self, CommandError> {
        let args = args.ok_or(CommandError::PlaceArgsMissing)?;
        let &[x, y, facing] = args else {
            return Err(CommandError::PlaceArgsInvalid);
        };
        let coordinate = |s: &str| s.parse::<i32>().map_err(|_| CommandError::PlaceArgsInvalid);
        Ok(Self {
            x: coordinate(x)?,
            y: coordinate(y)?,
            facing: facing.parse().map_err(|_| CommandError::PlaceArgsInvalid)?,
        })
    }
}

/// A syntactically valid command, ready for dispatch.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "UPPERCASE")]
pub enum Command {
    Place(PlaceArgs),
    Move,
    Left,
    Right,
    Report,
}

impl Command {
    pub fn action(&self) -> Action {
        match self {
            Self::Place(_) => Action::Place,
            Self::Move => Action::Move,
            Self::Left => Action::Left,
            Self::Right => Action::Right,
            Self::Report => Action::Report,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place(args) => write!(f, "PLACE {},{},{}", args.x, args.y, args.facing),
            other => f.write_str(other.action().name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_are_upper_case() {
        assert_eq!(Action::Place.to_string(), "PLACE");
        assert_eq!(Action::Move.to_string(), "MOVE");
        assert_eq!(Action::Left.to_string(), "LEFT");
        assert_eq!(Action::Right.to_string(), "RIGHT");
        assert_eq!(Action::Report.to_string(), "REPORT");
    }

    #[test]
    fn place_args_reject_missing_list() {
        assert_eq!(PlaceArgs::from_args(None), Err(CommandError::PlaceArgsMissing));
    }

    #[test]
    fn place_args_reject_wrong_count() {
        assert_eq!(
            PlaceArgs::from_args(Some(&[][..])),
            Err(CommandError::PlaceArgsInvalid)
        );
        assert_eq!(
            PlaceArgs::from_args(Some(&["1", "1", "NORTH", "X"][..])),
            Err(CommandError::PlaceArgsInvalid)
        );
    }

    #[test]
    fn place_args_reject_non_numeric_coordinates() {
        assert_eq!(
            PlaceArgs::from_args(Some(&["a", "1", "NORTH"][..])),
            Err(CommandError::PlaceArgsInvalid)
        );
        assert_eq!(
            PlaceArgs::from_args(Some(&["1", "", "NORTH"][..])),
            Err(CommandError::PlaceArgsInvalid)
        );
    }

    #[test]
    fn place_args_reject_unknown_direction() {
        assert_eq!(
            PlaceArgs::from_args(Some(&["1", "1", "north"][..])),
            Err(CommandError::PlaceArgsInvalid)
        );
    }

    #[test]
    fn place_args_keep_out_of_range_coordinates() {
        let args = PlaceArgs::from_args(Some(&["9", "-2", "WEST"][..])).unwrap();
        assert_eq!(args.x, 9);
        assert_eq!(args.y, -2);
        assert_eq!(args.facing, Direction::West);
    }

    #[test]
    fn command_displays_in_grammar_form() {
        let place = Command::Place(PlaceArgs {
            x: 1,
            y: 2,
            facing: Direction::South,
        });
        assert_eq!(place.to_string(), "PLACE 1,2,SOUTH");
        assert_eq!(Command::Report.to_string(), "REPORT");
    }

    #[test]
    fn command_serializes_with_action_tag() {
        let json = serde_json::to_value(Command::Move).unwrap();
        assert_eq!(json["action"], "MOVE");
    }
}
