//! Backlog item aggregate and its workflow state machine.

use super::{
    BacklogItemId, BacklogItemState, BacklogTransition, ProjectRole, RoleNotification,
    ScrumDomainError, SprintId,
};
use crate::notification::domain::TeamMemberId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::debug;

/// A unit of work tracked through the backlog workflow.
///
/// Activities are nested backlog items owned by their parent. The parent can
/// only be completed once every activity is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacklogItem {
    id: BacklogItemId,
    title: String,
    state: BacklogItemState,
    assignee: TeamMemberId,
    sprint: Option<SprintId>,
    activities: Vec<BacklogItem>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BacklogItem {
    /// Creates a new item in [`BacklogItemState::Todo`].
    #[must_use]
    pub fn new(
        id: BacklogItemId,
        title: impl Into<String>,
        assignee: TeamMemberId,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title: title.into(),
            state: BacklogItemState::Todo,
            assignee,
            sprint: None,
            activities: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> &BacklogItemId {
        &self.id
    }

    /// Returns the item title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current workflow state.
    #[must_use]
    pub const fn state(&self) -> BacklogItemState {
        self.state
    }

    /// Returns the assigned team member.
    #[must_use]
    pub const fn assignee(&self) -> TeamMemberId {
        self.assignee
    }

    /// Returns the sprint this item is planned in, if any.
    #[must_use]
    pub const fn sprint(&self) -> Option<SprintId> {
        self.sprint
    }

    /// Returns the nested activities in insertion order.
    #[must_use]
    pub fn activities(&self) -> &[Self] {
        &self.activities
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Finds a nested activity at any depth.
    #[must_use]
    pub fn find_activity(&self, id: &BacklogItemId) -> Option<&Self> {
        self.activities.iter().find_map(|activity| {
            if activity.id == *id {
                Some(activity)
            } else {
                activity.find_activity(id)
            }
        })
    }

    /// Finds a nested activity at any depth for mutation.
    pub fn find_activity_mut(&mut self, id: &BacklogItemId) -> Option<&mut Self> {
        self.activities.iter_mut().find_map(|activity| {
            if activity.id == *id {
                Some(activity)
            } else {
                activity.find_activity_mut(id)
            }
        })
    }

    /// Returns `true` when `id` names this item or any nested activity.
    #[must_use]
    pub fn contains(&self, id: &BacklogItemId) -> bool {
        self.id == *id || self.find_activity(id).is_some()
    }

    /// Returns the identifiers of this item and every nested activity.
    #[must_use]
    pub fn ids(&self) -> Vec<&BacklogItemId> {
        let mut ids = vec![&self.id];
        for activity in &self.activities {
            ids.extend(activity.ids());
        }
        ids
    }

    /// Returns the assignees of this item and every nested activity.
    #[must_use]
    pub fn assignees(&self) -> Vec<TeamMemberId> {
        let mut assignees = vec![self.assignee];
        for activity in &self.activities {
            assignees.extend(activity.assignees());
        }
        assignees
    }

    /// Attaches an activity to this item.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::DuplicateActivity`] when the activity, or
    /// any activity nested under it, reuses an identifier already present in
    /// this item's tree, and
    /// [`ScrumDomainError::IllegalStateAdvance`] when this item is done.
    pub fn add_activity(
        &mut self,
        activity: Self,
        clock: &impl Clock,
    ) -> Result<(), ScrumDomainError> {
        if self.state == BacklogItemState::Done {
            return Err(ScrumDomainError::illegal(format!(
                "Cannot add activity {} to backlogitem {}: it is already done.",
                activity.id, self.id
            )));
        }
        let duplicate = activity
            .ids()
            .into_iter()
            .find(|id| self.contains(id))
            .cloned();
        if let Some(duplicate_id) = duplicate {
            return Err(ScrumDomainError::DuplicateActivity {
                parent: self.id.clone(),
                activity: duplicate_id,
            });
        }
        self.activities.push(activity);
        self.touch(clock);
        Ok(())
    }

    /// Reassigns the item to another team member.
    pub fn reassign(&mut self, assignee: TeamMemberId, clock: &impl Clock) {
        self.assignee = assignee;
        self.touch(clock);
    }

    /// Records the sprint this item is planned in.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::ItemAlreadyPlanned`] when the item already
    /// belongs to a sprint.
    pub fn plan_into(&mut self, sprint: SprintId) -> Result<(), ScrumDomainError> {
        if let Some(existing) = self.sprint {
            return Err(ScrumDomainError::ItemAlreadyPlanned {
                item: self.id.clone(),
                sprint: existing,
            });
        }
        self.sprint = Some(sprint);
        Ok(())
    }

    /// Applies a workflow transition.
    ///
    /// On success the item's state changes and the notification the
    /// transition triggers, if any, is returned for dispatch. On failure the
    /// item is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::IllegalStateAdvance`] when the transition
    /// is not allowed from the current state, or when moving to done while an
    /// activity is still open.
    pub fn apply(
        &mut self,
        transition: BacklogTransition,
        clock: &impl Clock,
    ) -> Result<Option<RoleNotification>, ScrumDomainError> {
        let from = self.state;
        let target = transition.target();

        if transition == BacklogTransition::ToDone {
            self.ensure_activities_done()?;
        }
        if from == BacklogItemState::Todo && target == BacklogItemState::Todo {
            return Err(ScrumDomainError::illegal(
                "This backlog item is already in Todo",
            ));
        }
        if !from.can_transition_to(target) {
            return Err(ScrumDomainError::illegal(format!(
                "Cannot move backlogitem {} from {from} to {target}",
                self.id
            )));
        }

        self.state = target;
        self.touch(clock);
        debug!(item = %self.id, %from, to = %target, "backlog item transitioned");
        Ok(self.notification_for(from, target))
    }

    /// Moves the item from Todo to Doing.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn move_to_doing(
        &mut self,
        clock: &impl Clock,
    ) -> Result<Option<RoleNotification>, ScrumDomainError> {
        self.apply(BacklogTransition::ToDoing, clock)
    }

    /// Moves the item from Doing to Ready For Testing.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn move_to_ready_for_testing(
        &mut self,
        clock: &impl Clock,
    ) -> Result<Option<RoleNotification>, ScrumDomainError> {
        self.apply(BacklogTransition::ToReadyForTesting, clock)
    }

    /// Moves the item from Ready For Testing to Testing.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn move_to_testing(
        &mut self,
        clock: &impl Clock,
    ) -> Result<Option<RoleNotification>, ScrumDomainError> {
        self.apply(BacklogTransition::ToTesting, clock)
    }

    /// Moves the item from Testing to Tested.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn move_to_tested(
        &mut self,
        clock: &impl Clock,
    ) -> Result<Option<RoleNotification>, ScrumDomainError> {
        self.apply(BacklogTransition::ToTested, clock)
    }

    /// Moves the item from Tested to Done once every activity is done.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn move_to_done(
        &mut self,
        clock: &impl Clock,
    ) -> Result<Option<RoleNotification>, ScrumDomainError> {
        self.apply(BacklogTransition::ToDone, clock)
    }

    /// Moves the item back to Todo from Done or Ready For Testing.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn move_to_todo(
        &mut self,
        clock: &impl Clock,
    ) -> Result<Option<RoleNotification>, ScrumDomainError> {
        self.apply(BacklogTransition::ToTodo, clock)
    }

    fn ensure_activities_done(&self) -> Result<(), ScrumDomainError> {
        match self
            .activities
            .iter()
            .find(|activity| activity.state != BacklogItemState::Done)
        {
            Some(open) => Err(ScrumDomainError::illegal(format!(
                "Cannot move backlogitem to Done: activity {} is not done yet.",
                open.id
            ))),
            None => Ok(()),
        }
    }

    fn notification_for(
        &self,
        from: BacklogItemState,
        target: BacklogItemState,
    ) -> Option<RoleNotification> {
        match target {
            BacklogItemState::Doing => Some(RoleNotification::new(
                ProjectRole::ScrumMaster,
                format!("Backlogitem {} has been moved to Doing", self.id),
            )),
            BacklogItemState::ReadyForTesting => Some(RoleNotification::new(
                ProjectRole::Tester,
                format!("Backlogitem {} is ready for testing", self.id),
            )),
            BacklogItemState::Todo => Some(RoleNotification::new(
                ProjectRole::ScrumMaster,
                format!("Backlogitem {} has been moved from {from} to Todo", self.id),
            )),
            BacklogItemState::Testing | BacklogItemState::Tested | BacklogItemState::Done => None,
        }
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
