//! Notification fan-out services.

mod config;
mod dispatch;

pub use config::{NotificationConfig, NotificationConfigError};
pub use dispatch::NotificationService;
