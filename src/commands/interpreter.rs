use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::Config;

use super::error::InputResult;
use super::executor::{CommandExecutor, Reply};
use super::parser::CommandParser;

/// Counters for one interpreter run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub commands: usize,
    pub queries: usize,
    pub errors: usize,
}

/// Reads commands from a stream, applies them, and prints query counts.
pub struct Interpreter {
    executor: CommandExecutor,
    separator: String,
}

impl Interpreter {
    pub fn new(config: &Config) -> Self {
        Interpreter::with_separator(config.output_separator.clone())
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Interpreter {
            executor: CommandExecutor::new(),
            separator: separator.into(),
        }
    }

    /// Processes `input` until it ends.
    ///
    /// Query counts are written to `output` joined by the separator, with a
    /// trailing newline once anything was written. Malformed commands are
    /// logged and skipped; only I/O failures stop the run.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> InputResult<RunSummary> {
        let mut summary = RunSummary::default();

        for parsed in CommandParser::new(input) {
            match parsed {
                Ok(command) => {
                    summary.commands += 1;
                    if let Reply::Count(count) = self.executor.execute_command(command) {
                        if summary.queries > 0 {
                            output.write_all(self.separator.as_bytes())?;
                        }
                        write!(output, "{}", count)?;
                        summary.queries += 1;
                    }
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "skipping malformed input");
                    summary.errors += 1;
                }
                Err(e) => return Err(e),
            }
        }

        if summary.queries > 0 {
            writeln!(output)?;
        }
        output.flush()?;
        debug!(?summary, "input exhausted");
        Ok(summary)
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }
}
