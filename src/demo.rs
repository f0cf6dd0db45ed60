//! Scripted demonstration run.
//!
//! The robot walks the perimeter of a 5x5 board clockwise from the
//! south-west corner, bumping the north, east and south edges, stops
//! short of the west edge, then spins in place and reports. Pacing
//! between steps belongs to the host.

use crate::command::Outcome;
use crate::Robot;

/// Command lines of the demonstration, in order.
pub const DEMO_SCRIPT: &[&str] = &[
    "PLACE 1,1,NORTH",
    "MOVE",
    "MOVE",
    "MOVE",
    "MOVE",
    "MOVE",
    "RIGHT",
    "MOVE",
    "MOVE",
    "MOVE",
    "MOVE",
    "MOVE",
    "RIGHT",
    "MOVE",
    "MOVE",
    "MOVE",
    "MOVE",
    "MOVE",
    "RIGHT",
    "MOVE",
    "MOVE",
    "MOVE",
    "LEFT",
    "LEFT",
    "LEFT",
    "LEFT",
    "LEFT",
    "REPORT",
];

/// Replay the script, calling `on_step` after every command.
///
/// Returns the outcomes in script order.
pub fn replay<F>(robot: &mut Robot, mut on_step: F) -> Vec<Outcome>
where
    F: FnMut(&str, &Outcome, &Robot),
{
    DEMO_SCRIPT
        .iter()
        .map(|&line| {
            let outcome = robot.execute(line);
            on_step(line, &outcome, robot);
            outcome
        })
        .collect()
}
