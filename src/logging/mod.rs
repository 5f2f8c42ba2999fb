//! Installs the process-wide `tracing` subscriber.
//!
//! Logs go to stderr so they never mix with query results on stdout.

use std::io;

use tracing::level_filters::LevelFilter;

use crate::config::{Config, ConfigError};

pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

/// Installs a `fmt` subscriber at the configured level. A subscriber that is
/// already installed is left in place.
pub fn init(config: &Config) -> Result<(), ConfigError> {
    let level = parse_level(&config.log_level)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}
