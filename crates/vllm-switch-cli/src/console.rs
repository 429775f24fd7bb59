//! Line-oriented terminal I/O for the menu.
//!
//! Reads come from any `BufRead` and writes go to any `Write`, so the whole
//! loop can be driven from a scripted transcript in tests.

use crate::presentation::style;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal before each menu redraw.
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    pub fn show(&mut self, view: impl Display) -> io::Result<()> {
        write!(self.output, "{}", view)
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Push buffered output out before a child process writes to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    /// Print `prompt` and read one answer, trimmed and lower-cased.
    ///
    /// Returns `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", style::strong(prompt))?;
        self.output.flush()?;

        Ok(self
            .read_answer()?
            .map(|answer| answer.trim().to_lowercase()))
    }

    /// Yes/no question; anything but `y` is a no. `None` on end of input.
    pub fn confirm(&mut self, question: &str) -> io::Result<Option<bool>> {
        Ok(self
            .ask(&format!("{} (y/n): ", question))?
            .map(|answer| answer == "y"))
    }

    /// Wait for Enter. Returns `false` once input is exhausted.
    pub fn pause(&mut self) -> io::Result<bool> {
        self.blank()?;
        write!(self.output, "{}", style::info("Press Enter to continue..."))?;
        self.output.flush()?;

        Ok(self.read_answer()?.is_some())
    }

    /// One raw line of input. Bytes that are not UTF-8 are replaced rather
    /// than rejected, so they end up as an unknown choice.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
