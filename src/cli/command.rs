// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Parsing of shell command lines.

use std::path::PathBuf;
use std::str::SplitWhitespace;
use thiserror::Error;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `load <file>`
    Load(PathBuf),
    /// `insert <word>`
    Insert(String),
    /// `search <word>`
    Search(String),
    /// `suggest <prefix> [limit]`; a limit without leading digits is `None`
    Suggest {
        /// Prefix to complete
        prefix: String,
        /// Requested cap
        limit: Option<usize>,
    },
    /// `count <prefix>`
    Count(String),
    /// `export [file]`
    Export(Option<PathBuf>),
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

/// Reasons a line does not yield a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line holds nothing but whitespace.
    #[error("empty command line")]
    Empty,

    /// A known command is missing its argument.
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// The first token is not a known command.
    #[error("Unknown command. Type 'help'.")]
    Unknown(String),
}

impl Command {
    /// Parses one line of shell input.
    ///
    /// Arguments are whitespace separated; tokens past the ones a command
    /// uses are ignored.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(CommandError::Empty);
        };

        match name {
            "quit" | "exit" => Ok(Self::Quit),
            "help" => Ok(Self::Help),
            "load" => {
                required(&mut tokens, "load <file>").map(|file| Self::Load(PathBuf::from(file)))
            }
            "insert" => required(&mut tokens, "insert <word>").map(Self::Insert),
            "search" => required(&mut tokens, "search <word>").map(Self::Search),
            "suggest" => {
                let prefix = required(&mut tokens, "suggest <prefix> [limit]")?;
                let limit = tokens.next().and_then(leading_number);
                Ok(Self::Suggest { prefix, limit })
            }
            "count" => required(&mut tokens, "count <prefix>").map(Self::Count),
            "export" => Ok(Self::Export(tokens.next().map(PathBuf::from))),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required(tokens: &mut SplitWhitespace<'_>, usage: &'static str) -> Result<String, CommandError> {
    tokens
        .next()
        .map(str::to_string)
        .ok_or(CommandError::Usage(usage))
}

/// Reads the digits at the start of `token`, so `5x` is `5`.
fn leading_number(token: &str) -> Option<usize> {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().ok()
}
