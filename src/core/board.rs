//! Board dimensions and grid coordinates.
//!
//! Coordinates are 1-based: a board of width 5 has columns `1..=5`.
//! `x` grows to the east and `y` grows to the north.

use super::direction::Direction;
use super::guard::Guard;
use crate::error::RobotError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest allowed board side.
pub const MIN_BOARD_SIZE: i32 = 1;

/// Largest allowed board side.
pub const MAX_BOARD_SIZE: i32 = 5;

/// A cell on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Validated board dimensions. Immutable once built.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Board {
    width: u8,
    height: u8,
}

impl Board {
    /// Build a board, rejecting any side outside `[1, 5]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toy_robot::core::Board;
    ///
    /// assert!(Board::new(5, 5).is_ok());
    /// assert!(Board::new(0, 5).is_err());
    /// assert!(Board::new(5, 6).is_err());
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self, RobotError> {
        let valid = |side: i32| (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&side);
        match (u8::try_from(width), u8::try_from(height)) {
            (Ok(w), Ok(h)) if valid(width) && valid(height) => Ok(Self {
                width: w,
                height: h,
            }),
            _ => Err(RobotError::InvalidDimensions { width, height }),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at `(x, y)` if it lies on the board.
    pub fn cell(&self, x: i32, y: i32) -> Option<Position> {
        let on_board = (1..=i32::from(self.width)).contains(&x)
            && (1..=i32::from(self.height)).contains(&y);
        if !on_board {
            return None;
        }
        // Both coordinates are within 1..=5 here.
        Some(Position::new(x as u8, y as u8))
    }

    /// Guard allowing a single step in `facing` without leaving the board.
    pub fn edge_guard(&self, facing: Direction) -> Guard<Position> {
        let Board { width, height } = *self;
        match facing {
            Direction::North => Guard::new(move |p: &Position| p.y < height),
            Direction::East => Guard::new(move |p: &Position| p.x < width),
            Direction::South => Guard::new(|p: &Position| p.y > 1),
            Direction::West => Guard::new(|p: &Position| p.x > 1),
        }
    }

    /// Cell one step from `from` in `facing`, or `None` at the edge.
    ///
    /// Exactly one axis changes.
    pub fn step(&self, from: Position, facing: Direction) -> Option<Position> {
        if !self.edge_guard(facing).check(&from) {
            return None;
        }
        let Position { x, y } = from;
        Some(match facing {
            Direction::North => Position::new(x, y + 1),
            Direction::East => Position::new(x + 1, y),
            Direction::South => Position::new(x, y - 1),
            Direction::West => Position::new(x - 1, y),
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: MAX_BOARD_SIZE as u8,
            height: MAX_BOARD_SIZE as u8,
        }
    }
}
