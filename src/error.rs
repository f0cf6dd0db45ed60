//! Errors raised for misuse of the robot API.
//!
//! These are hard failures. Ordinary command outcomes such as an
//! off-board move are plain return values, never errors.

use thiserror::Error;

/// Errors that can occur when constructing a robot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RobotError {
    #[error("Board X and Y must be between 1 and 5.")]
    InvalidDimensions { width: i32, height: i32 },
}

/// A string that is not one of `NORTH`, `EAST`, `SOUTH` or `WEST`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown direction '{0}', expected NORTH, EAST, SOUTH or WEST")]
pub struct ParseDirectionError(pub String);
