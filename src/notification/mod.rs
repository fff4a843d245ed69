//! Notification dispatch for project team members.
//!
//! Team members act as observers: any number of notification receivers can
//! subscribe to a member, and notifying the member forwards the message to
//! every receiver in subscription order. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Fan-out services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
