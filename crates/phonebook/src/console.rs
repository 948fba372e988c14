//! Console input and output.
//!
//! [`Console`] owns the three streams the interactive session talks to: a
//! line reader, an output stream for prompts and results, and an error
//! stream for I/O diagnostics. Production code wires it to stdio; tests wire
//! it to in-memory buffers and script the input.

use std::io::{self, BufRead, Write};

use tracing::trace;

use crate::contact::FieldKind;
use crate::error::{Error, Result};
use crate::validation::FieldRule;

/// Prompts shown before reading a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Name of a contact being created.
    NewName,
    /// Phone number of a contact being created.
    NewNumber,
    /// Name fragment to search for.
    SearchName,
}

impl Prompt {
    /// The text printed for this prompt.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::NewName => "Enter the name of the new contact:",
            Self::NewNumber => "Enter the phone number of the new contact:",
            Self::SearchName => "Enter the name to search for:",
        }
    }

    /// The field kind this prompt collects.
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Self::NewName | Self::SearchName => FieldKind::Name,
            Self::NewNumber => FieldKind::Number,
        }
    }
}

/// A line reader paired with output and error writers.
#[derive(Debug)]
pub struct Console<R, W, E> {
    input: R,
    output: W,
    error: E,
}

/// A console attached to the process's standard streams.
pub type StdConsole = Console<io::StdinLock<'static>, io::Stdout, io::Stderr>;

impl StdConsole {
    /// Attach to stdin, stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    /// Build a console over arbitrary streams.
    pub fn new(input: R, output: W, error: E) -> Self {
        Self {
            input,
            output,
            error,
        }
    }

    /// Print a line on the output stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print a line on the error stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the error stream cannot be written.
    pub fn report(&mut self, line: &str) -> Result<()> {
        writeln!(self.error, "{line}")?;
        self.error.flush()?;
        Ok(())
    }

    /// Read one line, trimmed of surrounding whitespace.
    ///
    /// Trimming follows Unicode `White_Space`, so no-break and em spaces are
    /// stripped along with ASCII blanks and the line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error if
    /// the input cannot be read.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Error::InputClosed);
        }
        trace!(len = buf.len(), "Read input line");
        Ok(buf.trim().to_string())
    }

    /// Prompt until a valid value for the prompt's field kind is entered.
    ///
    /// Each rejection prints the kind's diagnostic and asks again. There is
    /// no attempt limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] if input ends before a valid line, or
    /// an I/O error from any of the streams.
    pub fn read_field(&mut self, prompt: Prompt) -> Result<String> {
        let rule = FieldRule::for_kind(prompt.kind());
        loop {
            self.say(prompt.text())?;
            let line = self.read_line()?;
            if rule.accepts(&line) {
                return Ok(line);
            }
            self.say(rule.rejection_message())?;
        }
    }

    /// Consume the console, returning its streams.
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.error)
    }
}

/// A console over scripted input with captured output, for tests.
#[cfg(test)]
pub(crate) type ScriptedConsole = Console<io::Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

#[cfg(test)]
impl ScriptedConsole {
    /// Build a console whose input is `script`.
    pub(crate) fn scripted(script: &str) -> Self {
        Console::new(io::Cursor::new(script.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    /// Everything written to the output stream so far.
    pub(crate) fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Everything written to the error stream so far.
    pub(crate) fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.error).into_owned()
    }
}
