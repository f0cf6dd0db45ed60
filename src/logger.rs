//! `env_logger` backend for the `log` facade.

use log::{LevelFilter, SetLoggerError};

/// Map repeated `-v` flags to a level: warn, info, debug, trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG` directives refine the `-v` level.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init()
}
