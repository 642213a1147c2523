//! Ordered status-line writer.

use std::io::{self, Write};

/// Writes status lines, in order, to an output stream.
///
/// Reporting never fails: a write error is logged and the remaining lines
/// are dropped.
pub struct StatusReporter<W> {
    out: W,
}

impl StatusReporter<io::Stdout> {
    /// Reporter on the process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StatusReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write each line followed by a newline, then flush.
    pub fn report<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            if let Err(e) = writeln!(self.out, "{}", line.as_ref()) {
                tracing::warn!(error = %e, "Failed to write status line");
                return;
            }
        }
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "Failed to flush status output");
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
