//! Sprint aggregate.

use super::{
    BacklogItemId, ProjectId, RoleNotification, ScrumDomainError, SprintId, SprintKind,
    SprintOperation, SprintState,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive date range covered by a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintSchedule {
    starts_on: NaiveDate,
    ends_on: NaiveDate,
}

impl SprintSchedule {
    /// Creates a validated schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::InvalidSprintSchedule`] when `ends_on` is
    /// before `starts_on`.
    pub fn new(starts_on: NaiveDate, ends_on: NaiveDate) -> Result<Self, ScrumDomainError> {
        if ends_on < starts_on {
            return Err(ScrumDomainError::InvalidSprintSchedule { starts_on, ends_on });
        }
        Ok(Self { starts_on, ends_on })
    }

    /// Returns the first day of the sprint.
    #[must_use]
    pub const fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    /// Returns the last day of the sprint.
    #[must_use]
    pub const fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }
}

/// A time-boxed container of backlog items.
///
/// The sprint keeps only identifiers of its project and backlog items; the
/// entities themselves live in [`crate::scrum::services::ScrumBoard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprint {
    id: SprintId,
    project: ProjectId,
    name: String,
    kind: SprintKind,
    schedule: SprintSchedule,
    state: SprintState,
    review: Option<String>,
    backlog: Vec<BacklogItemId>,
}

impl Sprint {
    /// Creates a sprint in [`SprintState::Created`].
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::EmptySprintName`] when the name is blank.
    pub fn new(
        project: ProjectId,
        name: impl Into<String>,
        kind: SprintKind,
        schedule: SprintSchedule,
    ) -> Result<Self, ScrumDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ScrumDomainError::EmptySprintName);
        }
        Ok(Self {
            id: SprintId::new(),
            project,
            name: trimmed.to_owned(),
            kind,
            schedule,
            state: SprintState::Created,
            review: None,
            backlog: Vec::new(),
        })
    }

    /// Returns the sprint identifier.
    #[must_use]
    pub const fn id(&self) -> SprintId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }

    /// Returns the sprint name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sprint kind.
    #[must_use]
    pub const fn kind(&self) -> SprintKind {
        self.kind
    }

    /// Returns the sprint schedule.
    #[must_use]
    pub const fn schedule(&self) -> SprintSchedule {
        self.schedule
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SprintState {
        self.state
    }

    /// Returns the uploaded review, if any.
    #[must_use]
    pub fn review(&self) -> Option<&str> {
        self.review.as_deref()
    }

    /// Returns the planned backlog item identifiers in planning order.
    #[must_use]
    pub fn backlog(&self) -> &[BacklogItemId] {
        &self.backlog
    }

    /// Records a backlog item as planned in this sprint.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::IllegalStateAdvance`] once the sprint has
    /// started.
    pub fn plan(&mut self, item: BacklogItemId) -> Result<(), ScrumDomainError> {
        if self.state != SprintState::Created {
            return Err(ScrumDomainError::illegal(format!(
                "Cannot add backlogitem {item} to a sprint that is {}",
                self.state
            )));
        }
        self.backlog.push(item);
        Ok(())
    }

    /// Attaches a review document to a finished review sprint.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::OperationNotPermitted`] unless this is a
    /// review sprint in [`SprintState::Finished`].
    pub fn upload_review(&mut self, review: impl Into<String>) -> Result<(), ScrumDomainError> {
        if self.kind != SprintKind::Review || self.state != SprintState::Finished {
            return Err(ScrumDomainError::not_permitted(format!(
                "Cannot upload a review while the sprint is {}",
                self.state
            )));
        }
        self.review = Some(review.into());
        Ok(())
    }

    /// Moves to the next lifecycle state.
    ///
    /// # Errors
    ///
    /// See [`SprintState::next`].
    pub fn move_to_next_state(&mut self) -> Result<Vec<RoleNotification>, ScrumDomainError> {
        self.advance(SprintOperation::ToNextState)
    }

    /// Releases a finished release sprint.
    ///
    /// # Errors
    ///
    /// See [`SprintState::next`].
    pub fn release(&mut self) -> Result<Vec<RoleNotification>, ScrumDomainError> {
        self.advance(SprintOperation::ReleaseSprint)
    }

    /// Closes a finished review sprint that has an uploaded review.
    ///
    /// # Errors
    ///
    /// See [`SprintState::next`].
    pub fn close_review(&mut self) -> Result<Vec<RoleNotification>, ScrumDomainError> {
        self.advance(SprintOperation::ReviewSprint)
    }

    /// Cancels a sprint that has not been closed yet.
    ///
    /// # Errors
    ///
    /// See [`SprintState::next`].
    pub fn cancel(&mut self) -> Result<Vec<RoleNotification>, ScrumDomainError> {
        self.advance(SprintOperation::CancelSprint)
    }

    /// Applies a state-changing operation and returns the entry
    /// notifications of the new state.
    ///
    /// # Errors
    ///
    /// See [`SprintState::next`].
    pub fn advance(
        &mut self,
        operation: SprintOperation,
    ) -> Result<Vec<RoleNotification>, ScrumDomainError> {
        let from = self.state;
        let target = from.next(self.kind, operation, self.review.is_some())?;
        self.state = target;
        debug!(sprint = %self.id, %from, to = %target, "sprint transitioned");
        Ok(target.entry_notifications())
    }
}
