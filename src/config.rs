//! Host configuration.
//!
//! Loaded from a TOML file. Every key is optional:
//!
//! ```toml
//! board-width = 5
//! board-height = 5
//! step-delay-ms = 500
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Board, MAX_BOARD_SIZE};
use crate::error::RobotError;

/// Default pause between demo steps.
pub const DEFAULT_STEP_DELAY_MS: u64 = 500;

/// Errors that can occur loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Board(#[from] RobotError),
}

/// Board and pacing settings for a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    pub board_width: i32,
    pub board_height: i32,
    pub step_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: MAX_BOARD_SIZE,
            board_height: MAX_BOARD_SIZE,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }
}

impl Config {
    /// Load config from `path`.
    /// Returns an error if the file is unreadable, malformed, or names a
    /// board size outside `[1, 5]`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.board()?;
        Ok(config)
    }

    /// Parse config text without validating the board.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The configured board.
    pub fn board(&self) -> Result<Board, RobotError> {
        Board::new(self.board_width, self.board_height)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}
