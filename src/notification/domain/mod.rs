//! Domain model for notification recipients.
//!
//! Members carry a validated name and an optional email address. Delivery
//! mechanics live behind the ports in [`crate::notification::ports`].

mod error;
mod ids;
mod recipient;
mod team_member;

pub use error::NotificationDomainError;
pub use ids::TeamMemberId;
pub use recipient::{EmailAddress, MemberName, Recipient};
pub use team_member::TeamMember;
