//! In-memory writer that records every line for later inspection.

use crate::notification::ports::Writer;
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe writer capturing lines in write order.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// messaging service and inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingWriter {
    lines: Arc<RwLock<Vec<String>>>,
}

impl RecordingWriter {
    /// Creates an empty recording writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every recorded line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` when `line` has been written at least once.
    #[must_use]
    pub fn received(&self, line: &str) -> bool {
        self.lines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|recorded| recorded == line)
    }

    /// Discards every recorded line.
    pub fn clear(&self) {
        self.lines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Writer for RecordingWriter {
    fn write_line(&self, line: &str) {
        self.lines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
    }
}
