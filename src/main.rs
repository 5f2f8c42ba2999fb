use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use avl_range_tree::commands::error::InputError;
use avl_range_tree::commands::interpreter::Interpreter;
use avl_range_tree::config::{Config, ConfigError, CONFIG_ENV};
use avl_range_tree::logging;

fn load_config() -> Result<Config, ConfigError> {
    let path = env::args_os()
        .nth(1)
        .or_else(|| env::var_os(CONFIG_ENV))
        .map(PathBuf::from);
    match path {
        Some(path) => Config::from_file(&path),
        None => Ok(Config::new()),
    }
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(&config) {
        eprintln!("failed to set up logging: {}", e);
        return ExitCode::FAILURE;
    }

    let mut interpreter = Interpreter::new(&config);
    let mut output = BufWriter::new(io::stdout().lock());
    let result = match &config.input {
        Some(path) => File::open(path)
            .map_err(InputError::from)
            .and_then(|file| interpreter.run(BufReader::new(file), &mut output)),
        None => interpreter.run(io::stdin().lock(), &mut output),
    };

    match result {
        Ok(summary) => {
            info!(
                commands = summary.commands,
                queries = summary.queries,
                errors = summary.errors,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "aborting");
            ExitCode::FAILURE
        }
    }
}
