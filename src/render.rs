//! Plain-text board rendering for hosts that draw the robot.
//!
//! The north-most row comes first. Each cell is `|_____|`; the robot's
//! cell shows a glyph for its facing, e.g. `|__^__|`.

use crate::core::Direction;
use crate::Robot;

const EMPTY_CELL: &str = "|_____|";

/// Glyph pointing the way the robot faces.
pub fn glyph(facing: Direction) -> char {
    match facing {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'V',
        Direction::West => '<',
    }
}

/// Draw the board with the robot on it, one text line per row.
///
/// # Example
///
/// ```rust
/// use toy_robot::{render, Robot};
///
/// let mut robot = Robot::new(2, 2).unwrap();
/// robot.place(1, 2, "EAST");
///
/// assert_eq!(render::board(&robot), "|__>__||_____|\n|_____||_____|");
/// ```
pub fn board(robot: &Robot) -> String {
    let board = robot.board();
    let position = robot.position();
    let facing = glyph(robot.direction());

    (1..=board.height())
        .rev()
        .map(|y| {
            (1..=board.width())
                .map(|x| match position {
                    Some(p) if p.x == x && p.y == y => format!("|__{facing}__|"),
                    _ => EMPTY_CELL.to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
