// src/commands/error.rs
use std::io;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("command '{command}' is missing an argument")]
    MissingArgument { command: char },

    #[error("invalid integer '{token}' for command '{command}': {source}")]
    InvalidInteger {
        command: char,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),

    #[error("empty input")]
    Empty,
}

impl InputError {
    /// Whether the interpreter can skip past this error and keep reading.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InputError::Io(_))
    }
}

pub type InputResult<T> = Result<T, InputError>;
