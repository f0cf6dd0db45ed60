//! Core robot types and logic.
//!
//! This module contains the pure value types the state machine is built
//! from:
//! - `Direction` and its turn cycle
//! - `Board` dimensions and `Position` cells
//! - `RobotState`, unplaced or placed
//! - `Guard` predicates for transition control
//!
//! Nothing here performs I/O or logging.

mod board;
mod direction;
mod guard;
mod state;

pub use board::{Board, Position, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use direction::Direction;
pub use guard::Guard;
pub use state::RobotState;
