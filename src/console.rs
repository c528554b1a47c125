//! Line-oriented terminal I/O for the menu

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use dialoguer::Password;

use crate::error::AppResult;

/// Prompted reads and writes over any input/output pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line without its line ending. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD instead of failing the read.
    pub fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print `label` and read the answer. End of input is an error here:
    /// the question cannot be answered.
    pub fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()?
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof).into())
    }

    pub fn print(&mut self, text: impl std::fmt::Display) -> AppResult<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: impl std::fmt::Display) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> AppResult<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        self.output.flush()?;
        Ok(())
    }

    /// Wait for the user to acknowledge the last output.
    pub fn pause(&mut self) -> AppResult<()> {
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Ask for the database password once. Input is hidden on a terminal; piped
/// input is read as a plain line.
pub fn read_password(user: &str) -> AppResult<String> {
    let label = format!("Enter password for user '{user}'");

    if io::stdin().is_terminal() {
        let password = Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()?;
        return Ok(password);
    }

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    console.prompt(&format!("{label}: "))
}
