//! Line-oriented prompting over any `BufRead`/`Write` pair.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input closed before an answer was read.
    #[error("end of input")]
    Eof,

    /// The answer could not be parsed as the expected type.
    #[error("invalid input: {0}")]
    Invalid(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `text` and flush, without a trailing newline.
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print `label` and read one line, without its line ending.
    pub fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        self.say(label)?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Print `label`, read one line and parse it.
    pub fn ask_parsed<T>(&mut self, label: &str) -> Result<T, PromptError>
    where
        T: FromStr,
        T::Err: core::fmt::Display,
    {
        let answer = self.ask(label)?;
        answer
            .trim()
            .parse()
            .map_err(|e: T::Err| PromptError::Invalid(e.to_string()))
    }
}
