//! Interactive prompt session
//!
//! Wraps the input and output streams behind one object so every flow takes
//! an explicit `&mut Session` instead of touching process-global stdio. Unit
//! tests drive flows with a `Cursor` reader and a `Vec<u8>` writer.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::theme;

pub struct Session<R, W> {
    input: R,
    output: W,
}

/// Session bound to process stdin/stdout, used by the real CLI.
pub fn stdio_session() -> Session<io::BufReader<io::Stdin>, io::Stdout> {
    Session::new(io::BufReader::new(io::stdin()), io::stdout())
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a styled question and block until a full line arrives.
    ///
    /// Returns `None` on end-of-input; the answer is trimmed otherwise.
    pub fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{} {} ", theme::PROMPT.cyan(), question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask a yes/no question. Only a case-insensitive `y` proceeds; every
    /// other answer, including end-of-input, counts as a cancellation.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(matches!(
            self.prompt(question)?,
            Some(answer) if answer.eq_ignore_ascii_case("y")
        ))
    }

    /// Write one plain line
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn say_success(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{} {}", theme::success(theme::SUCCESS), message)?;
        Ok(())
    }

    pub fn say_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{} {}", theme::error(theme::ERROR), message)?;
        Ok(())
    }

    pub fn say_bullet(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{} {}", theme::accent(theme::BULLET), message)?;
        Ok(())
    }

    pub fn divider(&mut self) -> Result<()> {
        writeln!(self.output, "{}", theme::divider())?;
        Ok(())
    }

    /// Consume the session and return the output stream, letting tests
    /// inspect everything a flow printed.
    pub fn into_output(self) -> W {
        self.output
    }
}
