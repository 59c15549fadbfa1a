//! Blocking stdin prompts
//!
//! Reads come from any `BufRead` so tests can script them with a `Cursor`.
//! The process suspends at each prompt until a line arrives; EOF reads as
//! an empty answer.

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line.
pub fn read_line(input: &mut dyn BufRead, prompt: &str) -> io::Result<String> {
    print!("{} ", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for confirmation; `y` or `yes` (any case) confirms.
pub fn confirm(input: &mut dyn BufRead, question: &str) -> io::Result<bool> {
    let answer = read_line(input, &format!("{} (y/N):", question))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Ask for confirmation of a destructive action; only the full word
/// `yes` (any case) confirms.
pub fn confirm_destructive(input: &mut dyn BufRead, question: &str) -> io::Result<bool> {
    let answer = read_line(input, &format!("{} (yes/NO):", question.yellow()))?;
    Ok(answer.to_lowercase() == "yes")
}
