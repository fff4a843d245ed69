//! Output sink port used by messaging services.

/// Line-oriented output sink.
///
/// This is the only boundary the notification subsystem touches. Adapters
/// decide where lines end up (console, test capture); delivery is
/// fire-and-forget, so implementations handle their own I/O failures.
#[cfg_attr(test, mockall::automock)]
pub trait Writer: Send + Sync {
    /// Appends one line to the sink.
    fn write_line(&self, line: &str);
}
