use std::fmt::Display;
use std::io::{BufRead, Write};

use super::errors::{CliError, CliResult};
use crate::domain::errors::DomainError;
use crate::domain::player::Age;

/// Line-oriented prompt/response over any reader and writer
///
/// Stdin/stdout in the binary, in-memory buffers in tests.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of feedback
    pub fn say(&mut self, message: impl Display) -> CliResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Shows `prompt` and reads one line without its line terminator
    ///
    /// # Returns
    /// * `Err(InputClosed)` - The input reached end of file
    pub fn ask(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Re-prompts until the answer is not blank
    pub fn ask_non_empty(&mut self, prompt: &str, subject: &'static str) -> CliResult<String> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.trim().is_empty() {
                return Ok(answer);
            }
            self.say(DomainError::EmptyName(subject))?;
        }
    }

    /// Re-prompts until the answer is usable as a player name
    ///
    /// Blank and all-digit names are refused.
    pub fn ask_player_name(&mut self, prompt: &str) -> CliResult<String> {
        loop {
            let answer = self.ask_non_empty(prompt, "Name")?;
            let trimmed = answer.trim();
            if !trimmed.chars().all(char::is_numeric) {
                return Ok(trimmed.to_string());
            }
            self.say(DomainError::NumericName("Name"))?;
        }
    }

    /// Re-prompts until the answer parses as a positive age
    pub fn ask_age(&mut self, prompt: &str) -> CliResult<Age> {
        loop {
            let answer = self.ask(prompt)?;
            match Age::parse(&answer) {
                Ok(age) => return Ok(age),
                Err(err) => self.say(err)?,
            }
        }
    }

    /// Asks a yes/no question; anything but "yes" or "y" declines
    pub fn confirm(&mut self, prompt: &str) -> CliResult<bool> {
        let answer = self.ask(prompt)?.trim().to_lowercase();
        Ok(matches!(answer.as_str(), "yes" | "y"))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
