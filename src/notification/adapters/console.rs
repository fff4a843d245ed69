//! Standard output writer.

use crate::notification::ports::Writer;
use std::io::{self, Write as _};
use tracing::warn;

/// Writes each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl ConsoleWriter {
    /// Creates a console writer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Writer for ConsoleWriter {
    fn write_line(&self, line: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{line}") {
            warn!(error = %err, "failed to write notification to stdout");
        }
    }
}
