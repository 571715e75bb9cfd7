//! Command domain model and raw-input parsing

use crate::domain::result::{Error, Result};

/// A parsed user command: lowercased name plus its raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Parse a raw input line into a command
    ///
    /// The line is trimmed and split on runs of whitespace; the first
    /// token becomes the command name (lowercased for dispatch), the
    /// rest are kept in order with their original casing.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut parts = input.split_whitespace();
        let name = parts.next().expect("non-blank input has a first token");

        Ok(Self {
            name: name.to_lowercase(),
            args: parts.map(str::to_string).collect(),
        })
    }
}
