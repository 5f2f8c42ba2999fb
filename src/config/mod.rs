pub mod config;

pub use config::{Config, ConfigError, CONFIG_ENV};
