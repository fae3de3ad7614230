//! Line-oriented command parsing for the interactive drivers.
//!
//! The three driver binaries (`heap_repl`, `priority_queue_repl`,
//! `queue_repl`) speak the same tiny text protocol: whitespace-separated
//! tokens, one-character commands, a `> ` prompt between commands, exit on
//! end of input. This module turns the token stream into [`Command`] values
//! so the binaries only have to wire commands to container operations.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A single driver command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `+ <int>`: insert/enqueue a value
    Insert(i64),
    /// `d`: delete/dequeue the next value
    Delete,
    /// `p`: print the container
    Print,
    /// `s`: print the size
    Size,
    /// `?`: print the help text
    Help,
}

/// Pulls [`Command`]s out of a buffered text stream.
///
/// Tokens that do not start a known command are ignored, as is a `+` whose
/// argument is missing or not an integer.
pub struct CommandStream<R> {
    reader: R,
    tokens: VecDeque<String>,
}

impl<R: BufRead> CommandStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tokens: VecDeque::new(),
        }
    }

    /// Returns the next command, or `None` at end of input.
    pub fn next_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            let Some(token) = self.next_token()? else {
                return Ok(None);
            };
            match token.as_str() {
                "d" => return Ok(Some(Command::Delete)),
                "p" => return Ok(Some(Command::Print)),
                "s" => return Ok(Some(Command::Size)),
                "?" => return Ok(Some(Command::Help)),
                t if t.starts_with('+') => {
                    // accept both "+ 5" and "+5"
                    let value = if t.len() > 1 {
                        t[1..].parse().ok()
                    } else {
                        self.next_token()?.and_then(|arg| arg.parse().ok())
                    };
                    if let Some(value) = value {
                        return Ok(Some(Command::Insert(value)));
                    }
                }
                _ => {}
            }
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
