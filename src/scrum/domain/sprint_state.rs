//! Sprint lifecycle states, operations and the transition table.

use super::{ParseSprintStateError, ProjectRole, RoleNotification, ScrumDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of sprint, which decides how a finished sprint is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintKind {
    /// Closed by releasing the increment.
    Release,
    /// Closed by reviewing the sprint with an uploaded review document.
    Review,
}

/// Lifecycle state of a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintState {
    /// Planned but not started; backlog items can be added.
    Created,
    /// Running.
    InProgress,
    /// Time box elapsed; waiting to be released or reviewed.
    Finished,
    /// The increment has been released.
    Released,
    /// The sprint review has been held.
    Reviewed,
    /// The sprint was abandoned.
    Cancelled,
}

/// An operation requested on a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintOperation {
    /// Attach a review document.
    ///
    /// This operation never changes state. Reviews are stored through
    /// `Sprint::upload_review`, which takes the review text; passed to
    /// [`SprintState::next`] it always fails with
    /// [`ScrumDomainError::OperationNotPermitted`].
    UploadReview,
    /// Move to the next state in the lifecycle.
    ToNextState,
    /// Release a finished release sprint.
    ReleaseSprint,
    /// Review a finished review sprint.
    ReviewSprint,
    /// Cancel the sprint.
    CancelSprint,
}

impl SprintOperation {
    /// Returns a human-readable verb phrase for messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::UploadReview => "upload a review",
            Self::ToNextState => "advance",
            Self::ReleaseSprint => "release",
            Self::ReviewSprint => "review",
            Self::CancelSprint => "cancel",
        }
    }
}

impl SprintState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
            Self::Released => "released",
            Self::Reviewed => "reviewed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns `true` for states that reject every further operation.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Released | Self::Reviewed | Self::Cancelled)
    }

    /// Resolves the state a state-changing operation leads to.
    ///
    /// `has_review` reports whether a review document has been uploaded;
    /// review sprints cannot be closed without one.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::IllegalStateAdvance`] when the operation
    /// does not apply in this state, and
    /// [`ScrumDomainError::OperationNotPermitted`] for
    /// [`SprintOperation::UploadReview`], which never changes state.
    pub fn next(
        self,
        kind: SprintKind,
        operation: SprintOperation,
        has_review: bool,
    ) -> Result<Self, ScrumDomainError> {
        let illegal = || {
            ScrumDomainError::illegal(format!(
                "Cannot {} sprint while it is {self}",
                operation.describe()
            ))
        };

        match (self, operation) {
            (Self::Finished, SprintOperation::UploadReview) if kind == SprintKind::Review => {
                Err(ScrumDomainError::not_permitted(
                    "Cannot upload a review without its text; use upload_review",
                ))
            }
            (_, SprintOperation::UploadReview) => Err(ScrumDomainError::not_permitted(format!(
                "Cannot upload a review while the sprint is {self}"
            ))),
            (state, _) if state.is_terminal() => Err(illegal()),
            (_, SprintOperation::CancelSprint) => Ok(Self::Cancelled),
            (Self::Created, SprintOperation::ToNextState) => Ok(Self::InProgress),
            (Self::InProgress, SprintOperation::ToNextState) => Ok(Self::Finished),
            (Self::Finished, SprintOperation::ToNextState) => match kind {
                SprintKind::Release => Ok(Self::Released),
                SprintKind::Review => Self::reviewed(has_review),
            },
            (Self::Finished, SprintOperation::ReleaseSprint) if kind == SprintKind::Release => {
                Ok(Self::Released)
            }
            (Self::Finished, SprintOperation::ReviewSprint) if kind == SprintKind::Review => {
                Self::reviewed(has_review)
            }
            _ => Err(illegal()),
        }
    }

    /// Notifications sent when a sprint enters this state.
    #[must_use]
    pub fn entry_notifications(self) -> Vec<RoleNotification> {
        let message = match self {
            Self::Released => "Sprint has been released",
            Self::Reviewed => "Sprint has been reviewed",
            Self::Cancelled => "Sprint has been cancelled",
            Self::Created | Self::InProgress | Self::Finished => return Vec::new(),
        };
        vec![
            RoleNotification::new(ProjectRole::ScrumMaster, message),
            RoleNotification::new(ProjectRole::ProductOwner, message),
        ]
    }

    fn reviewed(has_review: bool) -> Result<Self, ScrumDomainError> {
        if has_review {
            Ok(Self::Reviewed)
        } else {
            Err(ScrumDomainError::illegal(
                "Cannot review sprint: no review has been uploaded.",
            ))
        }
    }
}

impl fmt::Display for SprintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "Created",
            Self::InProgress => "In Progress",
            Self::Finished => "Finished",
            Self::Released => "Released",
            Self::Reviewed => "Reviewed",
            Self::Cancelled => "Cancelled",
        })
    }
}

impl TryFrom<&str> for SprintState {
    type Error = ParseSprintStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "created" => Ok(Self::Created),
            "in_progress" => Ok(Self::InProgress),
            "finished" => Ok(Self::Finished),
            "released" => Ok(Self::Released),
            "reviewed" => Ok(Self::Reviewed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseSprintStateError(value.to_owned())),
        }
    }
}
