//! Adapter implementations for notification ports.

mod console;
mod email;
mod recording;
mod slack;

pub use console::ConsoleWriter;
pub use email::EmailService;
pub use recording::RecordingWriter;
pub use slack::SlackService;
