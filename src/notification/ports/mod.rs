//! Port definitions for notification delivery.

mod receiver;
mod writer;

pub use receiver::{MessagingService, NotificationReceiver};
#[cfg(test)]
pub(crate) use writer::MockWriter;
pub use writer::Writer;
