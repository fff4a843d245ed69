//! Team member observer holding its notification subscriptions.

use super::{EmailAddress, MemberName, NotificationDomainError, Recipient, TeamMemberId};
use crate::notification::ports::NotificationReceiver;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A named role holder that forwards notifications to its subscribers.
///
/// # Examples
///
/// ```
/// use sprintflow::notification::domain::TeamMember;
///
/// let member = TeamMember::with_email("Jan de Scrumman", "jandescrumman@gmail.com")?;
/// assert_eq!(member.name().as_str(), "Jan de Scrumman");
/// assert_eq!(member.subscriber_count(), 0);
/// # Ok::<(), sprintflow::notification::domain::NotificationDomainError>(())
/// ```
#[derive(Clone)]
pub struct TeamMember {
    id: TeamMemberId,
    recipient: Recipient,
    subscribers: Vec<Arc<dyn NotificationReceiver>>,
}

impl TeamMember {
    /// Creates a member without an email address.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationDomainError::EmptyMemberName`] when the name is
    /// blank.
    pub fn new(name: impl Into<String>) -> Result<Self, NotificationDomainError> {
        Ok(Self::from_recipient(Recipient::new(MemberName::new(name)?)))
    }

    /// Creates a member with an email address.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationDomainError`] when the name is blank or the
    /// email address is malformed.
    pub fn with_email(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, NotificationDomainError> {
        let recipient = Recipient::new(MemberName::new(name)?).with_email(EmailAddress::new(email)?);
        Ok(Self::from_recipient(recipient))
    }

    /// Creates a member from already validated contact details.
    #[must_use]
    pub fn from_recipient(recipient: Recipient) -> Self {
        Self {
            id: TeamMemberId::new(),
            recipient,
            subscribers: Vec::new(),
        }
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> TeamMemberId {
        self.id
    }

    /// Returns the member name.
    #[must_use]
    pub const fn name(&self) -> &MemberName {
        self.recipient.name()
    }

    /// Returns the member email address, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.recipient.email()
    }

    /// Returns the contact details passed to receivers.
    #[must_use]
    pub const fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Returns the number of subscribed receivers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Appends a receiver to the subscription list.
    ///
    /// Subscribing the same receiver twice delivers every message twice.
    pub fn subscribe(&mut self, receiver: Arc<dyn NotificationReceiver>) {
        self.subscribers.push(receiver);
    }

    /// Forwards a message to every subscriber in subscription order.
    pub fn notify(&self, message: &str) {
        debug!(
            member = %self.recipient.name(),
            subscribers = self.subscribers.len(),
            "notifying team member"
        );
        for subscriber in &self.subscribers {
            subscriber.deliver(&self.recipient, message);
        }
    }
}

impl fmt::Debug for TeamMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeamMember")
            .field("id", &self.id)
            .field("recipient", &self.recipient)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
