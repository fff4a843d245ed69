//! Observer and messaging contracts.

use crate::notification::domain::Recipient;

/// Observer capability subscribed to a team member.
pub trait NotificationReceiver: Send + Sync {
    /// Delivers a message addressed to `recipient`.
    fn deliver(&self, recipient: &Recipient, message: &str);
}

/// A single delivery channel that formats and writes a notification.
pub trait MessagingService: Send + Sync {
    /// Formats `message` for `recipient` and hands it to the channel's sink.
    fn send(&self, recipient: &Recipient, message: &str);
}
