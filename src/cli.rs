//! Command-line shell around the robot.
//!
//! Two subcommands:
//!
//! - `toy-robot run [FILE]` feeds each line of `FILE` (or stdin) to the
//!   robot and prints the outcome.
//! - `toy-robot demo` replays the scripted demonstration with a pause
//!   between steps.
//!
//! Board size comes from `--config`, overridden by `--width`/`--height`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use log::info;
use serde_json::json;
use thiserror::Error;

use toy_robot::config::{Config, ConfigError};
use toy_robot::{demo, render, Outcome, Robot, RobotError};

/// Toy Robot: drive a robot around a small grid with text commands.
#[derive(Debug, Parser)]
#[command(name = "toy-robot", version, after_long_help = COMMAND_HELP)]
pub struct Cli {
    /// TOML config file with board-width, board-height, step-delay-ms.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Board width (1-5). Overrides the config file.
    #[arg(long, global = true)]
    width: Option<i32>,

    /// Board height (1-5). Overrides the config file.
    #[arg(long, global = true)]
    height: Option<i32>,

    /// Log more: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Command,
}

const COMMAND_HELP: &str = r#"Commands (case-insensitive):
  PLACE X,Y,F   put the robot at X,Y facing F (NORTH, EAST, SOUTH, WEST)
  MOVE          step one cell forward
  LEFT, RIGHT   turn a quarter in place
  REPORT        print position and facing

Example:
  printf 'PLACE 1,1,NORTH\nMOVE\nREPORT\n' | toy-robot run"#;

#[derive(Debug, Subcommand)]
enum Command {
    /// Run commands from a file, or stdin when no file is given.
    ///
    /// Blank lines are skipped. Each other line prints one outcome.
    Run {
        /// File of commands, one per line.
        file: Option<PathBuf>,

        /// Draw the board after every command.
        #[arg(long)]
        render: bool,

        /// Print one JSON object per command instead of plain messages.
        #[arg(long, conflicts_with = "render")]
        json: bool,
    },

    /// Replay the scripted demonstration.
    Demo {
        /// Draw the board after every command.
        #[arg(long)]
        render: bool,

        /// Pause between commands. Overrides the config file.
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Board(#[from] RobotError),

    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// How each step is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Render,
    Json,
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(width) = cli.width {
        config.board_width = width;
    }
    if let Some(height) = cli.height {
        config.board_height = height;
    }

    let board = config.board()?;
    info!("board is {}x{}", board.width(), board.height());
    let mut robot = Robot::on_board(board);

    match cli.command {
        Command::Run { file, render, json } => {
            let style = match (render, json) {
                (_, true) => Style::Json,
                (true, _) => Style::Render,
                _ => Style::Plain,
            };
            let input: Box<dyn BufRead> = match file {
                Some(path) => {
                    let file =
                        File::open(&path).map_err(|source| CliError::Open { path, source })?;
                    Box::new(BufReader::new(file))
                }
                None => Box::new(io::stdin().lock()),
            };
            run_lines(&mut robot, input, style)
        }
        Command::Demo { render, delay_ms } => {
            let delay = delay_ms.map_or_else(|| config.step_delay(), Duration::from_millis);
            let style = if render { Style::Render } else { Style::Plain };
            run_demo(&mut robot, delay, style)
        }
    }
}

/// Bytes that are not UTF-8 are replaced, so such a line still gets an
/// outcome (invalid command) and the run goes on.
fn run_lines(robot: &mut Robot, mut input: impl BufRead, style: Style) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        let outcome = robot.execute(line);
        write_step(&mut out, line, &outcome, robot, style)?;
    }
    Ok(())
}

fn run_demo(robot: &mut Robot, delay: Duration, style: Style) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    let mut result = Ok(());
    demo::replay(robot, |line, outcome, robot| {
        if result.is_ok() {
            result = write_step(&mut out, line, outcome, robot, style);
            thread::sleep(delay);
        }
    });
    result
}

fn write_step(
    out: &mut impl Write,
    line: &str,
    outcome: &Outcome,
    robot: &Robot,
    style: Style,
) -> Result<(), CliError> {
    match style {
        Style::Plain => writeln!(out, "{outcome}")?,
        Style::Render => {
            writeln!(out, "> {}", line.trim())?;
            writeln!(out, "{outcome}")?;
            writeln!(out, "{}", render::board(robot))?;
            writeln!(out)?;
        }
        Style::Json => {
            let step = json!({
                "command": line,
                "outcome": outcome,
                "message": outcome.to_string(),
                "state": robot.state(),
            });
            serde_json::to_writer(&mut *out, &step)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
