//! Error types for notification domain validation.

use thiserror::Error;

/// Errors returned while constructing notification domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationDomainError {
    /// The member name is empty after trimming.
    #[error("team member name must not be empty")]
    EmptyMemberName,

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}', expected local@domain")]
    InvalidEmailAddress(String),
}
