//! Fan-out of one notification across every configured channel.

use super::NotificationConfig;
use crate::notification::{
    adapters::{EmailService, SlackService},
    domain::Recipient,
    ports::{MessagingService, NotificationReceiver, Writer},
};
use std::sync::Arc;
use tracing::debug;

/// Receiver that forwards each message to its email and Slack channels.
///
/// Channels are invoked in the order they were added: email first, then
/// Slack.
#[derive(Clone)]
pub struct NotificationService {
    channels: Vec<Arc<dyn MessagingService>>,
}

impl NotificationService {
    /// Creates a service sending through both `email` and `slack`.
    #[must_use]
    pub fn new(email: EmailService, slack: SlackService) -> Self {
        let email_channel: Arc<dyn MessagingService> = Arc::new(email);
        let slack_channel: Arc<dyn MessagingService> = Arc::new(slack);
        Self {
            channels: vec![email_channel, slack_channel],
        }
    }

    /// Creates a service whose enabled channels all write to `writer`.
    #[must_use]
    pub fn from_config(config: NotificationConfig, writer: &Arc<dyn Writer>) -> Self {
        let mut channels: Vec<Arc<dyn MessagingService>> = Vec::with_capacity(2);
        if config.email_enabled {
            channels.push(Arc::new(EmailService::new(Arc::clone(writer))));
        }
        if config.slack_enabled {
            channels.push(Arc::new(SlackService::new(Arc::clone(writer))));
        }
        Self { channels }
    }

    /// Creates a service from arbitrary channels, invoked in order.
    #[must_use]
    pub fn with_channels(channels: impl IntoIterator<Item = Arc<dyn MessagingService>>) -> Self {
        Self {
            channels: channels.into_iter().collect(),
        }
    }

    /// Returns the number of configured channels.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Sends `message` to `recipient` through every channel.
    pub fn send(&self, recipient: &Recipient, message: &str) {
        debug!(
            recipient = %recipient.name(),
            channels = self.channels.len(),
            "dispatching notification"
        );
        for channel in &self.channels {
            channel.send(recipient, message);
        }
    }
}

impl NotificationReceiver for NotificationService {
    fn deliver(&self, recipient: &Recipient, message: &str) {
        self.send(recipient, message);
    }
}
