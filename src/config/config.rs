use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming a config file when none is given on the
/// command line.
pub const CONFIG_ENV: &str = "AVL_RANGE_TREE_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    /// Written between consecutive query results.
    pub output_separator: String,
    /// Command file to read instead of stdin.
    pub input: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Config {
            log_level: "warn".to_string(),
            output_separator: " ".to_string(),
            input: None,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(text)?)
    }
}
