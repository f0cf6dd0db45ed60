//! Compass facing of the robot.
//!
//! Directions form a fixed cycle `[NORTH, EAST, SOUTH, WEST]`. Turning is
//! modular arithmetic over that cycle: `right` advances one step, `left`
//! goes back one step, and both wrap at either end.

use crate::error::ParseDirectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four compass facings.
///
/// The discriminants are the positions in the turn cycle.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::Direction;
///
/// assert_eq!(Direction::North.right(), Direction::East);
/// assert_eq!(Direction::North.left(), Direction::West);
/// assert_eq!("SOUTH".parse::<Direction>().unwrap(), Direction::South);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// The turn cycle. `right` walks it forwards, `left` backwards.
    pub const CYCLE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction in [`Direction::CYCLE`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index` in the cycle, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        Self::from_index(self.index() + Self::CYCLE.len() - 1)
    }

    /// Rotate a quarter turn clockwise.
    pub fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Upper-case name used in commands and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsing is exact and case-sensitive: only `NORTH`, `EAST`, `SOUTH`
/// and `WEST` are accepted.
impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}
