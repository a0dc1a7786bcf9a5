//! Interactive input handling
//!
//! Validation is decoupled from I/O: [`parse_count`] and [`parse_yes_no`]
//! are pure functions, and the prompt loops run over an injectable
//! [`InputSource`] instead of reading stdin directly.

use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};

/// Where prompt answers come from.
pub trait InputSource {
    /// Display `prompt` and read one line of input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Reads answers from stdin, writing prompts to stdout.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| Error::InvalidInput(e.to_string()))?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        Ok(line)
    }
}

/// Parse a wallet count: a strictly positive integer.
pub fn parse_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let count = trimmed
        .parse::<u32>()
        .map_err(|_| Error::InvalidInput(format!("not a valid count: {trimmed:?}")))?;

    if count == 0 {
        return Err(Error::InvalidInput(
            "count must be greater than 0".to_string(),
        ));
    }

    Ok(count)
}

/// Parse a y/n answer, case-insensitively. Empty input resolves to
/// `default` when one is given.
pub fn parse_yes_no(input: &str, default: Option<bool>) -> Result<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        "" => default.ok_or_else(|| Error::InvalidInput("please enter y or n".to_string())),
        other => Err(Error::InvalidInput(format!(
            "please enter y or n, got {other:?}"
        ))),
    }
}

/// Ask for a wallet count until the answer is a positive integer.
pub fn prompt_count(input: &mut impl InputSource, prompt: &str) -> Result<u32> {
    loop {
        let line = input.read_line(prompt)?;
        match parse_count(&line) {
            Ok(count) => return Ok(count),
            Err(_) => println!("Please enter a valid number greater than 0."),
        }
    }
}

/// Ask a y/n question until the answer parses.
pub fn prompt_yes_no(
    input: &mut impl InputSource,
    prompt: &str,
    default: Option<bool>,
) -> Result<bool> {
    loop {
        let line = input.read_line(prompt)?;
        match parse_yes_no(&line, default) {
            Ok(choice) => return Ok(choice),
            Err(_) => println!("Please enter y or n."),
        }
    }
}
