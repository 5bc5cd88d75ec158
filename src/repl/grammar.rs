//! Interactive command grammar.
//!
//! ```text
//! COMMAND           := HELP | EXIT | LOAD | LIST | MANY_CONSTRUCTORS
//! HELP              := "help" | "h"
//! EXIT              := "exit" | "quit" | "q"
//! LOAD              := "load" WS STRING
//! LIST              := "list"
//! MANY_CONSTRUCTORS := ("mc" | "many-constructors") WS "th" WS INTEGER
//! STRING            := '"' <no embedded '"'> '"'
//! INTEGER           := one-or-more decimal digits
//! WS                := one-or-more tab/space
//! ```
//!
//! Literals are case-sensitive and the whole line must be consumed. Parsing
//! has no side effects, so a rejected line leaves the session untouched.

use crate::errors::{Error, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Load { path: String },
    List,
    ManyConstructors { threshold: usize },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Help => write!(f, "help"),
            Command::Exit => write!(f, "exit"),
            Command::Load { path } => write!(f, "load \"{path}\""),
            Command::List => write!(f, "list"),
            Command::ManyConstructors { threshold } => write!(f, "mc th {threshold}"),
        }
    }
}

pub fn parse(input: &str) -> Result<Command> {
    CommandParser::new(input).command()
}

struct CommandParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> CommandParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn command(mut self) -> Result<Command> {
        if self.input.is_empty() {
            return Err(self.error("empty command"));
        }

        let start = self.pos;
        let command = match self.word() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "list" => Command::List,
            "load" => {
                self.whitespace()?;
                Command::Load {
                    path: self.string()?.to_string(),
                }
            }
            "mc" | "many-constructors" => {
                self.whitespace()?;
                self.keyword("th")?;
                self.whitespace()?;
                Command::ManyConstructors {
                    threshold: self.integer()?,
                }
            }
            "" => return Err(self.error("expected a command")),
            other => {
                let message = format!("unknown command `{other}`");
                self.pos = start;
                return Err(self.error(&message));
            }
        };

        self.end()?;
        Ok(command)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Maximal run of non-whitespace characters.
    fn word(&mut self) -> &'a str {
        self.take_while(|c| !is_ws(c))
    }

    fn keyword(&mut self, expected: &str) -> Result<()> {
        let start = self.pos;
        if self.word() == expected {
            Ok(())
        } else {
            self.pos = start;
            Err(self.error(&format!("expected `{expected}`")))
        }
    }

    fn whitespace(&mut self) -> Result<()> {
        if self.take_while(is_ws).is_empty() {
            Err(self.error("expected whitespace"))
        } else {
            Ok(())
        }
    }

    fn string(&mut self) -> Result<&'a str> {
        if !self.rest().starts_with('"') {
            return Err(self.error("expected a quoted string"));
        }
        let open = self.pos;
        self.pos += 1;
        let body = self.take_while(|c| c != '"');
        if self.rest().starts_with('"') {
            self.pos += 1;
            Ok(body)
        } else {
            self.pos = open;
            Err(self.error("unterminated string"))
        }
    }

    fn integer(&mut self) -> Result<usize> {
        let start = self.pos;
        let digits = self.take_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            return Err(self.error("expected an integer"));
        }
        digits.parse::<usize>().map_err(|_| {
            self.pos = start;
            self.error(&format!("integer `{digits}` is out of range"))
        })
    }

    fn end(&self) -> Result<()> {
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(self.error(&format!("unexpected trailing input `{}`", self.rest())))
        }
    }

    fn error(&self, message: &str) -> Error {
        Error::command_parse(
            self.input,
            self.pos,
            format!("{message} at column {}", self.pos + 1),
        )
    }
}

fn is_ws(c: char) -> bool {
    c == ' ' || c == '\t'
}
