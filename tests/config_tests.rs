use avl_range_tree::config::{Config, ConfigError};
use avl_range_tree::logging;
use std::fs;
use std::path::PathBuf;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output_separator, " ");
        assert_eq!(config.input, None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = "log_level = \"debug\"".parse().unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_separator, " ");
    }

    #[test]
    fn test_full_toml() {
        let text = "log_level = \"trace\"\noutput_separator = \"\\n\"\ninput = \"commands.txt\"\n";
        let config: Config = text.parse().unwrap();

        assert_eq!(config.output_separator, "\n");
        assert_eq!(config.input, Some(PathBuf::from("commands.txt")));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!("log_level = ".parse::<Config>(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("avl-range-tree-{}.toml", std::process::id()));
        fs::write(&path, "output_separator = \",\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.output_separator, ",");
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/nonexistent/avl-range-tree.toml");
        assert!(matches!(Config::from_file(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_log_levels() {
        assert!(logging::parse_level("off").is_ok());
        assert!(logging::parse_level("info").is_ok());
        assert!(matches!(
            logging::parse_level("loud"),
            Err(ConfigError::InvalidLogLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn test_init_twice() {
        let config = Config::new();
        assert!(logging::init(&config).is_ok());
        assert!(logging::init(&config).is_ok());
    }
}
