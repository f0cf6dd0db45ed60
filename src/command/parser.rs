//! Sanitizer for raw command lines.
//!
//! Input is trimmed and upper-cased, then must match one of:
//!
//! - exactly `MOVE`, `LEFT`, `RIGHT` or `REPORT`
//! - exactly `PLACE <x>,<y>,<DIRECTION>` with a single space after
//!   `PLACE`, single digits `1`-`5` for `x` and `y`, and no other
//!   whitespace
//!
//! The digit range is fixed at `1`-`5` whatever the board size. Whether
//! the cell is actually on the board is decided later by placement.

use super::{Command, PlaceArgs};
use crate::core::Direction;
use log::trace;

/// Parse a raw line into a command, or `None` if it is not valid syntax.
///
/// # Example
///
/// ```rust
/// use toy_robot::command::{parse, Command};
///
/// assert_eq!(parse("  move "), Some(Command::Move));
/// assert!(matches!(parse("place 1,2,north"), Some(Command::Place(_))));
/// assert_eq!(parse("PLACE"), None);
/// assert_eq!(parse("PLACE 6,1,NORTH"), None);
/// ```
pub fn parse(line: &str) -> Option<Command> {
    let normalized = trim(line).to_uppercase();
    let command = match normalized.as_str() {
        "MOVE" => Some(Command::Move),
        "LEFT" => Some(Command::Left),
        "RIGHT" => Some(Command::Right),
        "REPORT" => Some(Command::Report),
        other => parse_place(other),
    };
    match &command {
        Some(c) => trace!("parsed {line:?} as {c}"),
        None => trace!("rejected {line:?}"),
    }
    command
}

fn parse_place(normalized: &str) -> Option<Command> {
    let rest = normalized.strip_prefix("PLACE ")?;
    let args: Vec<&str> = rest.split(',').collect();
    let &[x, y, facing] = args.as_slice() else {
        return None;
    };
    if !is_grid_digit(x) || !is_grid_digit(y) || facing.parse::<Direction>().is_err() {
        return None;
    }
    PlaceArgs::from_args(Some(args.as_slice())).ok().map(Command::Place)
}

/// Strip surrounding whitespace and byte-order marks.
fn trim(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn is_grid_digit(s: &str) -> bool {
    matches!(s.as_bytes(), [b'1'..=b'5'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(x: i32, y: i32, facing: Direction) -> Option<Command> {
        Some(Command::Place(PlaceArgs { x, y, facing }))
    }

    #[test]
    fn bare_commands_parse() {
        assert_eq!(parse("MOVE"), Some(Command::Move));
        assert_eq!(parse("LEFT"), Some(Command::Left));
        assert_eq!(parse("RIGHT"), Some(Command::Right));
        assert_eq!(parse("REPORT"), Some(Command::Report));
    }

    #[test]
    fn input_is_trimmed_and_case_insensitive() {
        assert_eq!(parse("  report\n"), Some(Command::Report));
        assert_eq!(parse("\tLeFt "), Some(Command::Left));
        assert_eq!(parse("place 3,4,west"), place(3, 4, Direction::West));
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        assert_eq!(parse("\u{FEFF}PLACE 1,1,NORTH"), place(1, 1, Direction::North));
        assert_eq!(parse("\u{FEFF} move \u{FEFF}"), Some(Command::Move));
        assert_eq!(parse("\u{FEFF}"), None);
    }

    #[test]
    fn place_parses_every_direction() {
        assert_eq!(parse("PLACE 1,1,NORTH"), place(1, 1, Direction::North));
        assert_eq!(parse("PLACE 5,5,SOUTH"), place(5, 5, Direction::South));
        assert_eq!(parse("PLACE 2,3,EAST"), place(2, 3, Direction::East));
        assert_eq!(parse("PLACE 4,1,WEST"), place(4, 1, Direction::West));
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert_eq!(parse("ROBOT"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("MOVE MOVE"), None);
        assert_eq!(parse("MOVES"), None);
        assert_eq!(parse("REPORT NOW"), None);
    }

    #[test]
    fn place_without_arguments_is_rejected() {
        assert_eq!(parse("PLACE"), None);
        assert_eq!(parse("PLACE "), None);
    }

    #[test]
    fn place_coordinates_must_be_single_digits_in_range() {
        assert_eq!(parse("PLACE 0,1,NORTH"), None);
        assert_eq!(parse("PLACE 1,6,NORTH"), None);
        assert_eq!(parse("PLACE 10,1,NORTH"), None);
        assert_eq!(parse("PLACE -1,1,NORTH"), None);
        assert_eq!(parse("PLACE A,1,NORTH"), None);
    }

    #[test]
    fn place_rejects_extra_whitespace_and_tokens() {
        assert_eq!(parse("PLACE  1,1,NORTH"), None);
        assert_eq!(parse("PLACE 1, 1,NORTH"), None);
        assert_eq!(parse("PLACE 1,1 ,NORTH"), None);
        assert_eq!(parse("PLACE\t1,1,NORTH"), None);
        assert_eq!(parse("PLACE 1,1,NORTH,EAST"), None);
        assert_eq!(parse("PLACE 1,1"), None);
        assert_eq!(parse("PLACE 1,1,NORTH MOVE"), None);
    }

    #[test]
    fn place_rejects_unknown_direction() {
        assert_eq!(parse("PLACE 1,1,UP"), None);
        assert_eq!(parse("PLACE 1,1,NORTHEAST"), None);
    }
}
