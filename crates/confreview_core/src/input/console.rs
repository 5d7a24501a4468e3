//! Prompting readers over any line source.
//!
//! # Responsibility
//! - Write a prompt, read one line, validate, and loop until valid.
//! - Keep all operator-facing error messages for malformed input here.
//!
//! # Invariants
//! - Numeric readers only return finite, non-negative values.
//! - Email reader only returns values ending in the configured domain.
//! - Every prompt is flushed before blocking on input.
//! - A line that is not UTF-8 is malformed input and gets re-prompted.

use super::menu::MenuOption;
use super::{InputError, InputResult};
use std::io::{BufRead, Write};

const MENU_PROMPT: &str = "Option: ";

/// Operator console bound to an input reader and an output writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    email_domain: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console that accepts emails ending in `email_domain`.
    pub fn new(reader: R, writer: W, email_domain: impl Into<String>) -> Self {
        Self {
            reader,
            writer,
            email_domain: email_domain.into(),
        }
    }

    /// Output side, for rendering report rows.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the console and returns the output writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Prompts until an integer in `1..=5` is entered.
    pub fn read_menu_choice(&mut self) -> InputResult<MenuOption> {
        loop {
            let Some(line) = self.prompt_line(MENU_PROMPT)? else {
                self.say("Invalid selection. Please try again.")?;
                continue;
            };
            match line.trim().parse::<i64>() {
                Ok(number) => match MenuOption::from_number(number) {
                    Some(option) => return Ok(option),
                    None => self.say("Please select one of the options listed.")?,
                },
                Err(_) => self.say("Invalid selection. Please try again.")?,
            }
        }
    }

    /// Prompts until a non-empty email ending in the configured domain is entered.
    pub fn read_email(&mut self, prompt: &str) -> InputResult<String> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                self.say("Invalid email. Please try again.")?;
                continue;
            };
            let email = line.trim();
            if email.is_empty() {
                self.say("Please enter an email.")?;
            } else if email.ends_with(self.email_domain.as_str()) {
                return Ok(email.to_string());
            } else {
                self.say("Invalid email. Please try again.")?;
            }
        }
    }

    /// Prompts until a non-blank area code is entered; returns it upper-cased.
    pub fn read_area(&mut self, prompt: &str) -> InputResult<String> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                self.say("Invalid area. Please try again.")?;
                continue;
            };
            let area = line.trim();
            if area.is_empty() {
                self.say("Please enter an area.")?;
            } else {
                return Ok(area.to_uppercase());
            }
        }
    }

    /// Prompts for a percentage and returns it as a fraction (`50` -> `0.5`).
    pub fn read_percentage(&mut self, prompt: &str) -> InputResult<f64> {
        Ok(self.read_non_negative(prompt)? / 100.0)
    }

    /// Prompts for a non-negative score, returned unscaled.
    pub fn read_score(&mut self, prompt: &str) -> InputResult<f64> {
        self.read_non_negative(prompt)
    }

    fn read_non_negative(&mut self, prompt: &str) -> InputResult<f64> {
        loop {
            let parsed = self.prompt_line(prompt)?.and_then(|line| parse_finite(&line));
            match parsed {
                Some(value) if value >= 0.0 => return Ok(value),
                Some(_) => self.say("Input must be positive. Please try again.")?,
                None => self.say("Empty or invalid value. Please try again.")?,
            }
        }
    }

    /// Reads one line after `prompt`; `None` when the line is not UTF-8.
    fn prompt_line(&mut self, prompt: &str) -> InputResult<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::Closed);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(String::from_utf8(buf).ok())
    }

    fn say(&mut self, message: &str) -> InputResult<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
