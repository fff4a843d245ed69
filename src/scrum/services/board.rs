//! In-memory board tying projects, sprints and backlog items together.

use crate::notification::domain::TeamMemberId;
use crate::scrum::domain::{
    BacklogItem, BacklogItemId, BacklogItemState, BacklogTransition, Project, ProjectId,
    RoleNotification, ScrumDomainError, Sprint, SprintId, SprintKind, SprintOperation,
    SprintSchedule, SprintState,
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request payload for creating a sprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSprintRequest {
    project: ProjectId,
    name: String,
    kind: SprintKind,
    schedule: SprintSchedule,
}

impl CreateSprintRequest {
    /// Creates a request for a sprint in `project`.
    #[must_use]
    pub fn new(
        project: ProjectId,
        name: impl Into<String>,
        kind: SprintKind,
        schedule: SprintSchedule,
    ) -> Self {
        Self {
            project,
            name: name.into(),
            kind,
            schedule,
        }
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrumBoardError {
    /// Domain validation or a state transition failed.
    #[error(transparent)]
    Domain(#[from] ScrumDomainError),

    /// No project exists with the given identifier.
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),

    /// No sprint exists with the given identifier.
    #[error("sprint {0} not found")]
    SprintNotFound(SprintId),

    /// No backlog item or activity exists with the given identifier.
    #[error("backlog item {0} not found")]
    BacklogItemNotFound(BacklogItemId),

    /// A backlog item with the same identifier is already on the board.
    #[error("backlog item {0} already exists")]
    DuplicateBacklogItem(BacklogItemId),

    /// The member does not belong to the project.
    #[error("team member {member} is not part of project {project}")]
    MemberNotInProject {
        /// Member identifier.
        member: TeamMemberId,
        /// Project identifier.
        project: ProjectId,
    },
}

impl ScrumBoardError {
    /// Returns the domain error message when this wraps an illegal state
    /// advance.
    #[must_use]
    pub fn illegal_state_advance(&self) -> Option<&str> {
        match self {
            Self::Domain(ScrumDomainError::IllegalStateAdvance(message)) => Some(message),
            _ => None,
        }
    }
}

/// Result type for board operations.
pub type ScrumBoardResult<T> = Result<T, ScrumBoardError>;

/// Owns every project, sprint and backlog item of a session.
///
/// Back-references are identifiers: a sprint names its project and a backlog
/// item names its sprint. The board resolves them when routing the
/// notifications returned by domain transitions.
pub struct ScrumBoard<C>
where
    C: Clock + Send + Sync,
{
    projects: HashMap<ProjectId, Project>,
    sprints: HashMap<SprintId, Sprint>,
    items: HashMap<BacklogItemId, BacklogItem>,
    clock: Arc<C>,
}

impl<C> ScrumBoard<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty board.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            projects: HashMap::new(),
            sprints: HashMap::new(),
            items: HashMap::new(),
            clock,
        }
    }

    /// Returns the board clock, for building backlog items.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Adds a project and returns its identifier.
    pub fn add_project(&mut self, project: Project) -> ProjectId {
        let id = project.id();
        self.projects.insert(id, project);
        id
    }

    /// Returns a project.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Returns a project for mutation, for instance to subscribe receivers.
    pub fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.get_mut(&id)
    }

    /// Returns a sprint.
    #[must_use]
    pub fn sprint(&self, id: SprintId) -> Option<&Sprint> {
        self.sprints.get(&id)
    }

    /// Returns a top-level backlog item or a nested activity.
    #[must_use]
    pub fn backlog_item(&self, id: &BacklogItemId) -> Option<&BacklogItem> {
        self.items.get(id).or_else(|| {
            self.items
                .values()
                .find_map(|root| root.find_activity(id))
        })
    }

    /// Creates a sprint for an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumBoardError::ProjectNotFound`] for an unknown project or
    /// a domain error for an invalid sprint name.
    pub fn create_sprint(&mut self, request: CreateSprintRequest) -> ScrumBoardResult<SprintId> {
        if !self.projects.contains_key(&request.project) {
            return Err(ScrumBoardError::ProjectNotFound(request.project));
        }
        let sprint = Sprint::new(
            request.project,
            request.name,
            request.kind,
            request.schedule,
        )?;
        let id = sprint.id();
        self.sprints.insert(id, sprint);
        Ok(id)
    }

    /// Plans a backlog item into a sprint.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumBoardError`] when the sprint is unknown or already
    /// started, the id of the item or of any nested activity is taken, the item is planned elsewhere, or an
    /// assignee is not a member of the sprint's project.
    pub fn add_backlog_item(
        &mut self,
        sprint_id: SprintId,
        mut item: BacklogItem,
    ) -> ScrumBoardResult<()> {
        self.ensure_ids_available(&item)?;
        let sprint = self
            .sprints
            .get_mut(&sprint_id)
            .ok_or(ScrumBoardError::SprintNotFound(sprint_id))?;
        let project = self
            .projects
            .get(&sprint.project())
            .ok_or(ScrumBoardError::ProjectNotFound(sprint.project()))?;
        if let Some(member) = item
            .assignees()
            .into_iter()
            .find(|member| !project.has_member(*member))
        {
            return Err(ScrumBoardError::MemberNotInProject {
                member,
                project: project.id(),
            });
        }

        item.plan_into(sprint_id)?;
        sprint.plan(item.id().clone())?;
        debug!(item = %item.id(), sprint = %sprint_id, "backlog item planned");
        self.items.insert(item.id().clone(), item);
        Ok(())
    }

    /// Attaches an activity to a backlog item or to another activity.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumBoardError`] when the parent is unknown, the id of the
    /// activity or of anything nested under it is taken, its assignee is outside the project, or the parent is
    /// done.
    pub fn add_activity(
        &mut self,
        parent: &BacklogItemId,
        activity: BacklogItem,
    ) -> ScrumBoardResult<()> {
        self.ensure_ids_available(&activity)?;
        let project_id = self.project_for_item(parent)?;
        if let Some(project_id) = project_id {
            self.ensure_members(project_id, &activity.assignees())?;
        }
        let clock = Arc::clone(&self.clock);
        let item = self
            .locate_mut(parent)
            .ok_or_else(|| ScrumBoardError::BacklogItemNotFound(parent.clone()))?;
        item.add_activity(activity, &*clock)?;
        Ok(())
    }

    /// Reassigns a backlog item or activity.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumBoardError`] when the item is unknown or the member is
    /// not part of the item's project.
    pub fn reassign(
        &mut self,
        item_id: &BacklogItemId,
        member: TeamMemberId,
    ) -> ScrumBoardResult<()> {
        if let Some(project_id) = self.project_for_item(item_id)? {
            self.ensure_members(project_id, &[member])?;
        }
        let clock = Arc::clone(&self.clock);
        let item = self
            .locate_mut(item_id)
            .ok_or_else(|| ScrumBoardError::BacklogItemNotFound(item_id.clone()))?;
        item.reassign(member, &*clock);
        Ok(())
    }

    /// Applies a workflow transition to a backlog item or activity and
    /// notifies the role the transition targets.
    ///
    /// Activities notify through the project of their root item's sprint.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumBoardError::BacklogItemNotFound`] for an unknown item
    /// or [`ScrumBoardError::Domain`] when the transition is illegal. A
    /// failed transition changes nothing and sends nothing.
    pub fn transition(
        &mut self,
        item_id: &BacklogItemId,
        transition: BacklogTransition,
    ) -> ScrumBoardResult<BacklogItemState> {
        let project_id = self.project_for_item(item_id)?;
        let clock = Arc::clone(&self.clock);
        let item = self
            .locate_mut(item_id)
            .ok_or_else(|| ScrumBoardError::BacklogItemNotFound(item_id.clone()))?;
        let notification = item.apply(transition, &*clock)?;
        let state = item.state();

        if let Some(notification) = notification {
            self.dispatch(project_id, &notification);
        }
        Ok(state)
    }

    /// Moves an item from Todo to Doing.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub fn move_to_doing(&mut self, item_id: &BacklogItemId) -> ScrumBoardResult<BacklogItemState> {
        self.transition(item_id, BacklogTransition::ToDoing)
    }

    /// Moves an item from Doing to Ready For Testing.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub fn move_to_ready_for_testing(
        &mut self,
        item_id: &BacklogItemId,
    ) -> ScrumBoardResult<BacklogItemState> {
        self.transition(item_id, BacklogTransition::ToReadyForTesting)
    }

    /// Moves an item from Ready For Testing to Testing.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub fn move_to_testing(
        &mut self,
        item_id: &BacklogItemId,
    ) -> ScrumBoardResult<BacklogItemState> {
        self.transition(item_id, BacklogTransition::ToTesting)
    }

    /// Moves an item from Testing to Tested.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub fn move_to_tested(
        &mut self,
        item_id: &BacklogItemId,
    ) -> ScrumBoardResult<BacklogItemState> {
        self.transition(item_id, BacklogTransition::ToTested)
    }

    /// Moves an item from Tested to Done.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub fn move_to_done(&mut self, item_id: &BacklogItemId) -> ScrumBoardResult<BacklogItemState> {
        self.transition(item_id, BacklogTransition::ToDone)
    }

    /// Moves an item back to Todo.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub fn move_to_todo(&mut self, item_id: &BacklogItemId) -> ScrumBoardResult<BacklogItemState> {
        self.transition(item_id, BacklogTransition::ToTodo)
    }

    /// Applies a sprint operation and sends the new state's entry
    /// notifications.
    ///
    /// [`SprintOperation::UploadReview`] carries no review text and is always
    /// rejected here; attach reviews with [`Self::upload_review`].
    ///
    /// # Errors
    ///
    /// Returns [`ScrumBoardError::SprintNotFound`] for an unknown sprint or
    /// [`ScrumBoardError::Domain`] when the operation is not allowed.
    pub fn advance_sprint(
        &mut self,
        sprint_id: SprintId,
        operation: SprintOperation,
    ) -> ScrumBoardResult<SprintState> {
        let sprint = self
            .sprints
            .get_mut(&sprint_id)
            .ok_or(ScrumBoardError::SprintNotFound(sprint_id))?;
        let project_id = sprint.project();
        if !self.projects.contains_key(&project_id) {
            return Err(ScrumBoardError::ProjectNotFound(project_id));
        }
        let notifications = sprint.advance(operation)?;
        let state = sprint.state();

        for notification in &notifications {
            self.dispatch(Some(project_id), notification);
        }
        Ok(state)
    }

    /// Uploads a review document to a finished review sprint.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumBoardError::SprintNotFound`] for an unknown sprint or
    /// [`ScrumDomainError::OperationNotPermitted`] when the sprint does not
    /// accept reviews in its current state.
    pub fn upload_review(
        &mut self,
        sprint_id: SprintId,
        review: impl Into<String>,
    ) -> ScrumBoardResult<()> {
        let sprint = self
            .sprints
            .get_mut(&sprint_id)
            .ok_or(ScrumBoardError::SprintNotFound(sprint_id))?;
        sprint.upload_review(review)?;
        Ok(())
    }

    /// Resolves the project an item notifies through, following the item's
    /// sprint back-reference. Items outside any sprint resolve to `None`.
    fn project_for_item(&self, item_id: &BacklogItemId) -> ScrumBoardResult<Option<ProjectId>> {
        let sprint_id = if self.items.contains_key(item_id) {
            self.items.get(item_id).and_then(BacklogItem::sprint)
        } else {
            self.items
                .values()
                .find(|root| root.find_activity(item_id).is_some())
                .ok_or_else(|| ScrumBoardError::BacklogItemNotFound(item_id.clone()))?
                .sprint()
        };

        let Some(sprint_id) = sprint_id else {
            return Ok(None);
        };
        let sprint = self
            .sprints
            .get(&sprint_id)
            .ok_or(ScrumBoardError::SprintNotFound(sprint_id))?;
        if !self.projects.contains_key(&sprint.project()) {
            return Err(ScrumBoardError::ProjectNotFound(sprint.project()));
        }
        Ok(Some(sprint.project()))
    }

    fn ensure_ids_available(&self, item: &BacklogItem) -> ScrumBoardResult<()> {
        match item
            .ids()
            .into_iter()
            .find(|id| self.backlog_item(id).is_some())
        {
            Some(taken) => Err(ScrumBoardError::DuplicateBacklogItem(taken.clone())),
            None => Ok(()),
        }
    }

    fn ensure_members(
        &self,
        project_id: ProjectId,
        members: &[TeamMemberId],
    ) -> ScrumBoardResult<()> {
        let project = self
            .projects
            .get(&project_id)
            .ok_or(ScrumBoardError::ProjectNotFound(project_id))?;
        match members.iter().find(|member| !project.has_member(**member)) {
            Some(member) => Err(ScrumBoardError::MemberNotInProject {
                member: *member,
                project: project_id,
            }),
            None => Ok(()),
        }
    }

    fn locate_mut(&mut self, item_id: &BacklogItemId) -> Option<&mut BacklogItem> {
        if self.items.contains_key(item_id) {
            return self.items.get_mut(item_id);
        }
        self.items
            .values_mut()
            .find_map(|root| root.find_activity_mut(item_id))
    }

    fn dispatch(&self, project_id: Option<ProjectId>, notification: &RoleNotification) {
        let Some(project) = project_id.and_then(|id| self.projects.get(&id)) else {
            debug!(
                role = %notification.role(),
                "no project resolved for notification; dropping it"
            );
            return;
        };
        project.notify(notification.role(), notification.message());
    }
}
