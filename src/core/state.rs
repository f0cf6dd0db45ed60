//! Robot state: unplaced, or placed at a cell with a facing.

use super::board::Position;
use super::direction::Direction;
use serde::{Deserialize, Serialize};

/// The robot's position on the board.
///
/// A robot starts `Unplaced`. The only way into `Placed` is a successful
/// placement, and there is no way back out.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Direction, Position, RobotState};
///
/// let state = RobotState::Placed {
///     position: Position::new(2, 3),
///     facing: Direction::East,
/// };
///
/// assert!(state.is_placed());
/// assert_eq!(state.name(), "Placed");
/// assert_eq!(state.facing(), Direction::East);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RobotState {
    #[default]
    Unplaced,
    Placed {
        position: Position,
        facing: Direction,
    },
}

impl RobotState {
    /// State name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unplaced => "Unplaced",
            Self::Placed { .. } => "Placed",
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Unplaced => None,
            Self::Placed { position, .. } => Some(*position),
        }
    }

    /// Current facing. An unplaced robot faces north.
    pub fn facing(&self) -> Direction {
        match self {
            Self::Unplaced => Direction::default(),
            Self::Placed { facing, .. } => *facing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unplaced_facing_north() {
        let state = RobotState::default();
        assert!(!state.is_placed());
        assert_eq!(state.position(), None);
        assert_eq!(state.facing(), Direction::North);
        assert_eq!(state.name(), "Unplaced");
    }

    #[test]
    fn placed_exposes_position_and_facing() {
        let state = RobotState::Placed {
            position: Position::new(4, 1),
            facing: Direction::West,
        };
        assert!(state.is_placed());
        assert_eq!(state.position(), Some(Position::new(4, 1)));
        assert_eq!(state.facing(), Direction::West);
    }

    #[test]
    fn state_serializes_with_tag() {
        let state = RobotState::Placed {
            position: Position::new(1, 2),
            facing: Direction::North,
        };
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["state"], "placed");
        assert_eq!(json["position"]["x"], 1);
        assert_eq!(json["facing"], "NORTH");

        let back: RobotState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn unplaced_serializes_with_tag_only() {
        let json = serde_json::to_string(&RobotState::Unplaced).unwrap();
        assert_eq!(json, r#"{"state":"unplaced"}"#);
    }
}
