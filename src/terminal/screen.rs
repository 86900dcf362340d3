//! Writes clock frames to a terminal writer.

use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::render::{ClockFrame, Renderer};
use crate::stopwatch::FrameSink;

/// A clock-face screen over any writer (stdout in the app, a buffer in tests).
///
/// Each frame clears the screen, homes the cursor and places every row
/// explicitly, since raw mode does not turn `\n` into a carriage return.
pub struct Screen<W: Write + Send> {
    out: Mutex<W>,
    renderer: Renderer,
}

impl Screen<io::Stdout> {
    pub fn stdout(renderer: Renderer) -> Self {
        Self::new(io::stdout(), renderer)
    }
}

impl<W: Write + Send> Screen<W> {
    pub fn new(out: W, renderer: Renderer) -> Self {
        Self {
            out: Mutex::new(out),
            renderer,
        }
    }

    /// Clear the screen and draw `frame` from the top-left corner.
    pub fn draw(&self, frame: &ClockFrame) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        write_frame(&mut *out, frame)
    }

    /// Consume the screen and return the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send + 'static> FrameSink for Screen<W> {
    fn present(&self, elapsed: u64) -> io::Result<()> {
        self.draw(&self.renderer.render(elapsed))
    }
}

/// Queue the clear, home and per-row moves for one frame, then flush.
pub fn write_frame<W: Write + ?Sized>(out: &mut W, frame: &ClockFrame) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?;
    out.queue(MoveTo(0, 0))?;
    for (row, text) in frame.rows().iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        out.queue(MoveTo(0, row))?;
        out.queue(Print(text))?;
    }
    out.flush()
}
