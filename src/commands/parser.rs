use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use super::error::{InputError, InputResult};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    /// `k <int>`
    Insert(i32),
    /// `q <min> <max>`
    Query(i32, i32),
}

/// Splits a line-oriented stream into whitespace-separated tokens.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> InputResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Reads `k`/`q` commands from a text stream.
///
/// Commands are whitespace separated and may share or span lines. Each call
/// to `next` yields one command or one input error; after a recoverable error
/// the parser resumes at the next unread token.
pub struct CommandParser<R> {
    tokens: Tokens<R>,
}

impl<R: BufRead> CommandParser<R> {
    pub fn new(reader: R) -> Self {
        CommandParser {
            tokens: Tokens::new(reader),
        }
    }

    fn argument(&mut self, command: char) -> InputResult<i32> {
        let token = self
            .tokens
            .next_token()?
            .ok_or(InputError::MissingArgument { command })?;
        token
            .parse::<i32>()
            .map_err(|source| InputError::InvalidInteger {
                command,
                token,
                source,
            })
    }

    fn command(&mut self, token: String) -> InputResult<Command> {
        match token.as_str() {
            "k" => Ok(Command::Insert(self.argument('k')?)),
            "q" => {
                let min = self.argument('q')?;
                let max = self.argument('q')?;
                Ok(Command::Query(min, max))
            }
            _ => Err(InputError::UnknownCommand(token)),
        }
    }
}

impl<R: BufRead> Iterator for CommandParser<R> {
    type Item = InputResult<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.tokens.next_token() {
            Ok(Some(token)) => Some(self.command(token)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Parses exactly one command, e.g. `"q 10 20"`.
impl FromStr for Command {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parser = CommandParser::new(input.as_bytes());
        let command = parser.next().ok_or(InputError::Empty)??;
        match parser.tokens.next_token()? {
            Some(extra) => Err(InputError::TrailingInput(extra)),
            None => Ok(command),
        }
    }
}
