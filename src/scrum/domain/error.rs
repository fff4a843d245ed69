//! Error types for Scrum workflow validation and parsing.

use super::{BacklogItemId, SprintId};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by Scrum domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScrumDomainError {
    /// The requested transition is not allowed from the current state, or a
    /// transition precondition is unmet.
    #[error("{0}")]
    IllegalStateAdvance(String),

    /// The operation is never allowed in the current state.
    #[error("{0}")]
    OperationNotPermitted(String),

    /// An activity with the same identifier is already attached.
    #[error("backlog item {parent} already has an activity {activity}")]
    DuplicateActivity {
        /// Parent backlog item.
        parent: BacklogItemId,
        /// Rejected activity identifier.
        activity: BacklogItemId,
    },

    /// The backlog item already belongs to a sprint.
    #[error("backlog item {item} is already planned in sprint {sprint}")]
    ItemAlreadyPlanned {
        /// Backlog item identifier.
        item: BacklogItemId,
        /// Sprint the item belongs to.
        sprint: SprintId,
    },

    /// The backlog item identifier is empty after trimming.
    #[error("backlog item identifier must not be empty")]
    EmptyBacklogItemId,

    /// The sprint name is empty after trimming.
    #[error("sprint name must not be empty")]
    EmptySprintName,

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The sprint ends before it starts.
    #[error("sprint cannot end on {ends_on} before it starts on {starts_on}")]
    InvalidSprintSchedule {
        /// First day of the sprint.
        starts_on: NaiveDate,
        /// Last day of the sprint.
        ends_on: NaiveDate,
    },
}

impl ScrumDomainError {
    pub(crate) fn illegal(message: impl Into<String>) -> Self {
        Self::IllegalStateAdvance(message.into())
    }

    pub(crate) fn not_permitted(message: impl Into<String>) -> Self {
        Self::OperationNotPermitted(message.into())
    }
}

/// Error returned while parsing backlog item states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown backlog item state: {0}")]
pub struct ParseBacklogItemStateError(pub String);

/// Error returned while parsing sprint states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sprint state: {0}")]
pub struct ParseSprintStateError(pub String);
