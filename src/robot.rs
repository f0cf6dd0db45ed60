//! The robot state machine.
//!
//! A [`Robot`] owns a fixed [`Board`] and a [`RobotState`]. Primitive
//! operations return `bool` and leave the state untouched when they fail.
//! The textual interface layers parsing and message formatting on top.

use crate::command::{self, Command, Outcome, PlaceArgs};
use crate::core::{Board, Direction, Position, RobotState};
use crate::error::RobotError;
use log::debug;

/// Coordinate reported by [`Robot::x`] and [`Robot::y`] before placement.
pub const UNPLACED_COORDINATE: i32 = -1;

/// A toy robot on a bounded grid.
///
/// # Example
///
/// ```rust
/// use toy_robot::Robot;
///
/// let mut robot = Robot::new(5, 5).unwrap();
///
/// assert_eq!(robot.command("PLACE 1,1,NORTH"), "PLACE Success.");
/// assert_eq!(robot.command("MOVE"), "MOVE Success.");
/// assert_eq!(robot.command("REPORT"), "X: 1 Y: 2 Looking: NORTH");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Robot {
    board: Board,
    state: RobotState,
}

impl Robot {
    /// Create an unplaced robot on a `board_x` by `board_y` board.
    ///
    /// Each side must be in `[1, 5]`.
    pub fn new(board_x: i32, board_y: i32) -> Result<Self, RobotError> {
        Ok(Self::on_board(Board::new(board_x, board_y)?))
    }

    /// Create an unplaced robot on an already validated board.
    pub fn on_board(board: Board) -> Self {
        Self {
            board,
            state: RobotState::Unplaced,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// Current state snapshot.
    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn is_placed(&self) -> bool {
        self.state.is_placed()
    }

    /// Current facing. North until the first placement.
    pub fn direction(&self) -> Direction {
        self.state.facing()
    }

    pub fn position(&self) -> Option<Position> {
        self.state.position()
    }

    /// Column, or [`UNPLACED_COORDINATE`] before placement.
    pub fn x(&self) -> i32 {
        self.position()
            .map_or(UNPLACED_COORDINATE, |p| i32::from(p.x))
    }

    /// Row, or [`UNPLACED_COORDINATE`] before placement.
    pub fn y(&self) -> i32 {
        self.position()
            .map_or(UNPLACED_COORDINATE, |p| i32::from(p.y))
    }

    /// Place the robot at `(x, y)` facing `direction`.
    ///
    /// `direction` must be exactly `NORTH`, `EAST`, `SOUTH` or `WEST`
    /// (case-sensitive). Returns `false` and changes nothing if the
    /// direction is unknown or the cell is off the board.
    pub fn place(&mut self, x: i32, y: i32, direction: &str) -> bool {
        match direction.parse::<Direction>() {
            Ok(facing) => self.place_facing(x, y, facing),
            Err(err) => {
                debug!("placement rejected: {err}");
                false
            }
        }
    }

    /// Typed form of [`Robot::place`].
    pub fn place_facing(&mut self, x: i32, y: i32, facing: Direction) -> bool {
        let Some(position) = self.board.cell(x, y) else {
            debug!(
                "placement rejected: ({x}, {y}) is off a {}x{} board",
                self.board.width(),
                self.board.height()
            );
            return false;
        };
        self.transition(RobotState::Placed { position, facing });
        true
    }

    /// Step one cell forward. Returns `false` if unplaced or at the edge.
    pub fn move_forward(&mut self) -> bool {
        let RobotState::Placed { position, facing } = self.state else {
            return false;
        };
        match self.board.step(position, facing) {
            Some(next) => {
                self.transition(RobotState::Placed {
                    position: next,
                    facing,
                });
                true
            }
            None => {
                debug!("move rejected: {facing} from {position} leaves the board");
                false
            }
        }
    }

    /// Turn a quarter counter-clockwise. Returns `false` if unplaced.
    pub fn left(&mut self) -> bool {
        self.turn(Direction::left)
    }

    /// Turn a quarter clockwise. Returns `false` if unplaced.
    pub fn right(&mut self) -> bool {
        self.turn(Direction::right)
    }

    fn turn(&mut self, rotate: fn(Direction) -> Direction) -> bool {
        let RobotState::Placed { position, facing } = self.state else {
            return false;
        };
        self.transition(RobotState::Placed {
            position,
            facing: rotate(facing),
        });
        true
    }

    fn transition(&mut self, to: RobotState) {
        debug!("{} {:?} -> {} {:?}", self.state.name(), self.state, to.name(), to);
        self.state = to;
    }

    /// Status line `X: {x} Y: {y} Looking: {DIRECTION}`.
    ///
    /// An unplaced robot reports the sentinel coordinates.
    pub fn report(&self) -> String {
        format!("X: {} Y: {} Looking: {}", self.x(), self.y(), self.direction())
    }

    /// Run one already-parsed command.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let applied = match command {
            Command::Place(PlaceArgs { x, y, facing }) => self.place_facing(x, y, facing),
            _ if !self.is_placed() => return Outcome::NotPlaced,
            Command::Move => self.move_forward(),
            Command::Left => self.left(),
            Command::Right => self.right(),
            Command::Report => return Outcome::Report(self.report()),
        };
        if applied {
            Outcome::Success(command.action())
        } else {
            Outcome::InvalidMove
        }
    }

    /// Parse and run a raw command line.
    pub fn execute(&mut self, line: &str) -> Outcome {
        match command::parse(line) {
            Some(command) => self.dispatch(command),
            None => Outcome::InvalidCommand,
        }
    }

    /// Parse and run a raw command line, returning the message for the user.
    ///
    /// Never fails: every input produces one of the fixed messages, a
    /// `"{ACTION} Success."` line, or a report.
    pub fn command(&mut self, line: &str) -> String {
        self.execute(line).to_string()
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::on_board(Board::default())
    }
}
