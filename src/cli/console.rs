//! Line-oriented console I/O
//!
//! Wraps an input reader and an output writer so the interactive menu can run
//! against stdin/stdout or against in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{MailroomError, MailroomResult};

/// Prompt-and-read console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console from any reader and writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one line, trimmed
    ///
    /// Returns `MailroomError::InputClosed` at end of input.
    pub fn prompt(&mut self, message: &str) -> MailroomResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MailroomError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Print a line
    pub fn println(&mut self, line: impl Display) -> MailroomResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print text as-is
    pub fn print(&mut self, text: &str) -> MailroomResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Consume the console, returning the output writer
    pub fn into_output(self) -> W {
        self.output
    }
}
