//! Display rendering seam
//!
//! The builder never talks to a screen directly; anything that can show
//! the expression implements [`DisplaySink`]. The placeholder rule lives
//! here so every sink agrees on what an empty expression looks like.

use std::io;

/// Placeholder shown when the expression is empty
pub const PLACEHOLDER: &str = "0";

/// What the display should show for a given expression string
pub fn display_text(expr: &str) -> &str {
    if expr.is_empty() {
        PLACEHOLDER
    } else {
        expr
    }
}

/// A surface that can render the current expression.
pub trait DisplaySink {
    /// Render the given text (already placeholder-substituted).
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying surface fails.
    fn render(&mut self, text: &str) -> io::Result<()>;
}

/// Renders each snapshot as a line to any writer. Used by the CLI and
/// by tests; the TUI draws from state directly.
pub struct WriteSink<W: io::Write> {
    writer: W,
}

impl<W: io::Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> DisplaySink for WriteSink<W> {
    fn render(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }
}
