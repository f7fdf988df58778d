#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use crate::{
    board::{Board, Grid},
    common::GameError,
    config::{BLANK_GLYPH, SUPPORTED_SIZES},
    coord::row_label,
    session::{Event, InputSource, OutputSink},
};

/// Interactive terminal input: prompts on `W`, reads answers from `R`.
pub struct CliPlayer<R, W> {
    reader: R,
    writer: W,
    preset_size: Option<usize>,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            preset_size: None,
        }
    }

    /// Answer the size prompt with `size` instead of asking.
    pub fn with_size(mut self, size: Option<usize>) -> Self {
        self.preset_size = size;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> InputSource for CliPlayer<R, W> {
    fn next_size(&mut self) -> anyhow::Result<Option<String>> {
        if let Some(size) = self.preset_size.take() {
            return Ok(Some(size.to_string()));
        }
        let sizes: Vec<String> = SUPPORTED_SIZES.iter().map(|s| s.to_string()).collect();
        self.prompt(&format!("Choose board size ({}): ", sizes.join(", ")))
    }

    fn next_guess(&mut self, _board: &Board) -> anyhow::Result<Option<String>> {
        self.prompt("Enter your guess (e.g., A1, B2): ")
    }
}

/// Terminal output sink: draws the board and prints event messages.
pub struct TerminalView<W> {
    writer: W,
}

impl TerminalView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for TerminalView<W> {
    fn render(&mut self, grid: &Grid) -> anyhow::Result<()> {
        print_grid(&mut self.writer, grid)?;
        Ok(())
    }

    fn notify(&mut self, event: Event) -> anyhow::Result<()> {
        match event {
            Event::AlreadyGuessed => writeln!(self.writer, "You've already guessed this spot!")?,
            Event::Miss => writeln!(self.writer, "Miss! ❌")?,
            Event::Hit(_) => writeln!(self.writer, "Hit! 🎯")?,
            Event::Won { guesses } => {
                writeln!(self.writer, "Congratulations! You sank all the ships! 🎉")?;
                writeln!(self.writer, "Guesses: {}", guesses)?;
            }
            Event::InvalidSize => writeln!(self.writer, "{}", GameError::InvalidSize)?,
            Event::InvalidCoordinate(reason) => writeln!(
                self.writer,
                "Invalid input ({}). Please enter a valid coordinate (e.g., A1).",
                reason
            )?,
        }
        Ok(())
    }
}

/// Print the board with column numbers across the top and row letters down
/// the side.
pub fn print_grid<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    writeln!(out, "\nCurrent Board:")?;
    write!(out, "   ")?;
    for c in 0..grid.len() {
        write!(out, " {:<2}", c + 1)?;
    }
    writeln!(out)?;
    for (r, row) in grid.iter().enumerate() {
        write!(out, " {} ", row_label(r))?;
        for glyph in row {
            // emoji glyphs already span two columns
            if *glyph == BLANK_GLYPH {
                write!(out, " {} ", glyph)?;
            } else {
                write!(out, " {}", glyph)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
