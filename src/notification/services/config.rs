//! Channel selection for notification fan-out.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selects which delivery channels a [`super::NotificationService`] uses.
///
/// # Examples
///
/// ```
/// use sprintflow::notification::services::NotificationConfig;
///
/// let config = NotificationConfig::default();
/// assert!(config.email_enabled);
/// assert!(config.slack_enabled);
///
/// let slack_only = NotificationConfig::from_json(r#"{"email_enabled": false}"#)?;
/// assert!(!slack_only.email_enabled);
/// assert!(slack_only.slack_enabled);
/// # Ok::<(), sprintflow::notification::services::NotificationConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Whether messages are sent by email.
    pub email_enabled: bool,
    /// Whether messages are sent to Slack.
    pub slack_enabled: bool,
}

impl NotificationConfig {
    /// Configuration that only sends email.
    #[must_use]
    pub const fn email_only() -> Self {
        Self {
            email_enabled: true,
            slack_enabled: false,
        }
    }

    /// Configuration that only sends Slack messages.
    #[must_use]
    pub const fn slack_only() -> Self {
        Self {
            email_enabled: false,
            slack_enabled: true,
        }
    }

    /// Parses a configuration from JSON. Missing fields fall back to the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationConfigError::Parse`] when the input is not a
    /// valid configuration object.
    pub fn from_json(input: &str) -> Result<Self, NotificationConfigError> {
        Ok(serde_json::from_str(input)?)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            email_enabled: true,
            slack_enabled: true,
        }
    }
}

/// Errors returned while loading notification configuration.
#[derive(Debug, Error)]
pub enum NotificationConfigError {
    /// The configuration could not be deserialized.
    #[error("invalid notification configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
