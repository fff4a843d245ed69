//! Email messaging channel.

use crate::notification::{
    domain::Recipient,
    ports::{MessagingService, Writer},
};
use std::sync::Arc;
use tracing::warn;

/// Writes notifications as `To: {name} <{email}>: {message}` lines.
#[derive(Clone)]
pub struct EmailService {
    writer: Arc<dyn Writer>,
}

impl EmailService {
    /// Creates an email service writing to `writer`.
    #[must_use]
    pub fn new(writer: Arc<dyn Writer>) -> Self {
        Self { writer }
    }

    /// Formats the email line, or `None` when the recipient has no address.
    #[must_use]
    pub fn format(recipient: &Recipient, message: &str) -> Option<String> {
        recipient
            .email()
            .map(|email| format!("To: {} <{email}>: {message}", recipient.name()))
    }
}

impl MessagingService for EmailService {
    fn send(&self, recipient: &Recipient, message: &str) {
        match Self::format(recipient, message) {
            Some(line) => self.writer.write_line(&line),
            None => warn!(
                recipient = %recipient.name(),
                "skipping email notification: recipient has no email address"
            ),
        }
    }
}
