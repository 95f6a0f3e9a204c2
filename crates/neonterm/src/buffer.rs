//! Output Buffer - queued terminal commands over any sink
//!
//! All rendering funnels through this type. Commands are queued and
//! flushed together so a frame lands atomically, and the sink is generic:
//! production uses `Stdout`, tests capture bytes in a `Vec<u8>`. On a
//! non-terminal sink the escape sequences are simply inert bytes.

use crossterm::{
    QueueableCommand, cursor,
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write};

/// A buffer that accumulates terminal commands before flushing.
pub struct OutputBuffer<W: Write = Stdout> {
    out: W,
}

impl<W: Write> OutputBuffer<W> {
    /// Wrap a sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the buffer and return the sink (used by tests to inspect
    /// captured bytes).
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Return the cursor to column zero without clearing.
    pub fn carriage_return(&mut self) -> io::Result<()> {
        self.out.queue(cursor::MoveToColumn(0))?;
        Ok(())
    }

    /// Clear the current line and return to column zero.
    pub fn clear_line(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::CurrentLine))?;
        self.out.queue(cursor::MoveToColumn(0))?;
        Ok(())
    }

    /// Clear from the cursor to the end of the line.
    pub fn clear_to_end(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::UntilNewLine))?;
        Ok(())
    }

    /// Clear the whole screen and home the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    /// Hide the cursor.
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.out.queue(cursor::Hide)?;
        Ok(())
    }

    /// Show the cursor.
    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.out.queue(cursor::Show)?;
        Ok(())
    }

    /// Write text without a newline.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")
    }

    /// Write text followed by a newline.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Write a blank line.
    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Flush all queued commands to the sink (atomic render).
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Default for OutputBuffer<Stdout> {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> std::fmt::Debug for OutputBuffer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputBuffer").finish_non_exhaustive()
    }
}
