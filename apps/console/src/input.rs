//! # Operator Console
//!
//! Line-based prompts over any `BufRead`/`Write` pair, styled through a
//! [`Presenter`].
//!
//! ## Input Rules
//! - Numeric prompts reject anything that is not an integer and ask again
//! - Yes/no prompts accept `y`, `yes`, `n`, `no` (any case)
//! - End of input is reported as [`AppError::InputClosed`]

use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};
use crate::presenter::{center, Presenter, Tone};

/// Left margin of every console line.
pub const INDENT: &str = "  ";

/// Width of title rules.
pub const SCREEN_WIDTH: usize = 78;

pub struct Console<R, W> {
    input: R,
    output: W,
    presenter: Box<dyn Presenter>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, presenter: Box<dyn Presenter>) -> Self {
        Console {
            input,
            output,
            presenter,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    pub fn line(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{INDENT}{text}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn painted(&mut self, text: &str, tone: Tone) -> AppResult<()> {
        let text = self.presenter.paint(text, tone);
        self.line(&text)
    }

    /// Writes a multi-line block (e.g. a receipt) with the usual margin.
    pub fn block(&mut self, text: &str) -> AppResult<()> {
        for line in text.lines() {
            self.line(line)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> AppResult<()> {
        let seq = self.presenter.clear_screen();
        write!(self.output, "{seq}")?;
        Ok(())
    }

    /// A centered heading between two `=` rules.
    pub fn title(&mut self, text: &str) -> AppResult<()> {
        let rule = "=".repeat(SCREEN_WIDTH);
        self.blank()?;
        self.painted(&rule, Tone::Title)?;
        self.painted(&center(text, SCREEN_WIDTH), Tone::Title)?;
        self.painted(&rule, Tone::Title)
    }

    pub fn section(&mut self, text: &str) -> AppResult<()> {
        self.blank()?;
        self.painted(&format!("--- {text} ---"), Tone::Accent)
    }

    pub fn option(&mut self, number: usize, text: &str) -> AppResult<()> {
        self.line(&format!("[{number}] {text}"))
    }

    pub fn success(&mut self, message: &str) -> AppResult<()> {
        self.blank()?;
        self.painted(&format!("V {message}"), Tone::Success)
    }

    pub fn error(&mut self, message: &str) -> AppResult<()> {
        self.blank()?;
        self.painted(&format!("X {message}"), Tone::Error)
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Prints `prompt` and reads one line, without the line ending.
    pub fn prompt_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{INDENT}{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks until the operator types an integer.
    pub fn prompt_number(&mut self, prompt: &str) -> AppResult<i64> {
        loop {
            let text = self.prompt_line(prompt)?;
            match parse_number(&text) {
                Ok(n) => return Ok(n),
                Err(e) => self.error(&e.to_string())?,
            }
        }
    }

    /// Asks until the operator answers yes or no.
    pub fn prompt_yes_no(&mut self, prompt: &str) -> AppResult<bool> {
        loop {
            let text = self.prompt_line(prompt)?;
            match parse_yes_no(&text) {
                Ok(answer) => return Ok(answer),
                Err(e) => self.error(&e.to_string())?,
            }
        }
    }

    pub fn pause(&mut self) -> AppResult<()> {
        self.blank()?;
        self.prompt_line("Press Enter to continue...")?;
        Ok(())
    }
}

/// Parses an operator-typed integer. Surrounding spaces are ignored.
pub fn parse_number(text: &str) -> AppResult<i64> {
    let text = text.trim();
    text.parse::<i64>()
        .map_err(|_| AppError::InvalidInput(format!("'{text}' is not a number, please try again")))
}

pub fn parse_yes_no(text: &str) -> AppResult<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(AppError::InvalidInput(format!("'{other}' is not y or n"))),
    }
}
