//! Erase and rewrite sequences.

use crate::meter::EraseMode;
use crate::utils::display_width;

use std::io::{self, Write};

const BACKSPACE: &str = "\x08";
const CLEAR_TO_END: &str = "\x1b[K";

/// The output stream of a meter, together with its erase model.
///
/// All widths are in terminal columns.
pub(crate) struct Terminal<W: Write> {
    out: W,
    mode: EraseMode,
}

impl<W: Write> Terminal<W> {
    pub(crate) fn new(out: W, mode: EraseMode) -> Self {
        Self { out, mode }
    }

    pub(crate) fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn spaces(&mut self, cols: usize) -> io::Result<()> {
        write!(self.out, "{:1$}", "", cols)
    }

    /// Move the cursor `cols` columns to the left.
    pub(crate) fn back(&mut self, cols: usize) -> io::Result<()> {
        if cols == 0 {
            return Ok(());
        }

        match self.mode {
            EraseMode::Backspace => self.write_str(&BACKSPACE.repeat(cols)),
            EraseMode::Ansi => write!(self.out, "\x1b[{cols}D"),
        }
    }

    /// Blank the `cols` columns left of the cursor, leaving the cursor at
    /// the start of the blanked region.
    pub(crate) fn blank(&mut self, cols: usize) -> io::Result<()> {
        if cols == 0 {
            return Ok(());
        }

        self.back(cols)?;
        match self.mode {
            EraseMode::Backspace => {
                self.spaces(cols)?;
                self.back(cols)
            }
            EraseMode::Ansi => self.write_str(CLEAR_TO_END),
        }
    }

    /// Replace the `cols` columns left of the cursor with `line`.
    pub(crate) fn rewrite(&mut self, cols: usize, line: &str) -> io::Result<()> {
        self.back(cols)?;
        match self.mode {
            EraseMode::Backspace => {
                self.write_str(line)?;
                let width = display_width(line);
                if width < cols {
                    // shorter than before: blank the stale tail
                    self.spaces(cols - width)?;
                    self.back(cols - width)?;
                }
                Ok(())
            }
            EraseMode::Ansi => {
                self.write_str(CLEAR_TO_END)?;
                self.write_str(line)
            }
        }
    }

    /// Clear a line of `cols` columns and return to its first column.
    pub(crate) fn clear_line(&mut self, cols: usize) -> io::Result<()> {
        match self.mode {
            EraseMode::Backspace => {
                self.write_str("\r")?;
                self.spaces(cols)?;
                self.write_str("\r")
            }
            EraseMode::Ansi => {
                self.write_str("\r")?;
                self.write_str(CLEAR_TO_END)
            }
        }
    }

    pub(crate) fn newline(&mut self) -> io::Result<()> {
        self.write_str("\n")
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub(crate) fn get_ref(&self) -> &W {
        &self.out
    }

    pub(crate) fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}
