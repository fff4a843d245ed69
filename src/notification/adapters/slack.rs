//! Slack messaging channel.

use crate::notification::{
    domain::Recipient,
    ports::{MessagingService, Writer},
};
use std::sync::Arc;

/// Writes notifications as `@<{name}>: {message}` lines.
#[derive(Clone)]
pub struct SlackService {
    writer: Arc<dyn Writer>,
}

impl SlackService {
    /// Creates a Slack service writing to `writer`.
    #[must_use]
    pub fn new(writer: Arc<dyn Writer>) -> Self {
        Self { writer }
    }

    /// Formats the Slack mention line.
    #[must_use]
    pub fn format(recipient: &Recipient, message: &str) -> String {
        format!("@<{}>: {message}", recipient.name())
    }
}

impl MessagingService for SlackService {
    fn send(&self, recipient: &Recipient, message: &str) {
        self.writer.write_line(&Self::format(recipient, message));
    }
}
