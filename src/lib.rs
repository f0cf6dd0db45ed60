//! Toy Robot: a deterministic robot state machine on a bounded grid.
//!
//! A robot sits on a board of at most 5x5 cells. It starts unplaced,
//! and accepts five textual commands:
//!
//! - `PLACE X,Y,F` puts it on cell `(X, Y)` facing `F`
//! - `MOVE` steps one cell forward unless that would leave the board
//! - `LEFT` and `RIGHT` turn it a quarter in place
//! - `REPORT` prints `X: {x} Y: {y} Looking: {F}`
//!
//! # Core Concepts
//!
//! - **Primitives**: `place`, `move_forward`, `left`, `right` mutate state
//!   and return `bool`; a `false` means nothing changed
//! - **Commands**: `Robot::command` parses a raw line, dispatches it and
//!   always returns a message, never an error
//! - **Hosts**: `render` and `demo` are helpers for presentation layers
//!
//! # Example
//!
//! ```rust
//! use toy_robot::Robot;
//!
//! let mut robot = Robot::new(5, 5).unwrap();
//!
//! for line in ["PLACE 1,1,NORTH", "MOVE", "RIGHT", "MOVE"] {
//!     robot.command(line);
//! }
//! assert_eq!(robot.command("REPORT"), "X: 2 Y: 2 Looking: EAST");
//! ```

pub mod command;
pub mod config;
pub mod core;
pub mod demo;
pub mod error;
pub mod render;
mod robot;

// Re-export commonly used types
pub use command::{Command, Outcome};
pub use config::Config;
pub use crate::core::{Board, Direction, Position, RobotState};
pub use error::RobotError;
pub use robot::{Robot, UNPLACED_COORDINATE};
