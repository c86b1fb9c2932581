//! Line-based prompts with defaults.
//!
//! Generic over the reader and writer so the interactive flows can be driven
//! from tests.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::error::ToolError;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Ask a question. A blank answer, or end of input, is `None`.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    pub fn ask_or(&mut self, question: &str, default: &str) -> io::Result<String> {
        Ok(self.ask(question)?.unwrap_or_else(|| default.to_string()))
    }

    /// Ask for a value of type `T`, falling back to `default` on a blank answer.
    pub fn ask_parsed<T: FromStr>(
        &mut self,
        field: &'static str,
        question: &str,
        default: T,
    ) -> Result<T, ToolError> {
        match self.ask(question)? {
            None => Ok(default),
            Some(value) => value
                .parse()
                .map_err(|_| ToolError::InvalidAnswer { field, value }),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
