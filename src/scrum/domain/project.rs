//! Project aggregate holding the team.

use super::{ProjectId, ProjectRole, ScrumDomainError};
use crate::notification::{
    domain::{TeamMember, TeamMemberId},
    ports::NotificationReceiver,
};
use std::sync::Arc;

/// A project with its Scrum Master, Tester, Product Owner and developers.
#[derive(Debug, Clone)]
pub struct Project {
    id: ProjectId,
    name: String,
    scrum_master: TeamMember,
    tester: TeamMember,
    product_owner: TeamMember,
    developers: Vec<TeamMember>,
}

impl Project {
    /// Creates a project with its three notification roles filled.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::EmptyProjectName`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        scrum_master: TeamMember,
        tester: TeamMember,
        product_owner: TeamMember,
    ) -> Result<Self, ScrumDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ScrumDomainError::EmptyProjectName);
        }
        Ok(Self {
            id: ProjectId::new(),
            name: trimmed.to_owned(),
            scrum_master,
            tester,
            product_owner,
            developers: Vec::new(),
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the Scrum Master.
    #[must_use]
    pub const fn scrum_master(&self) -> &TeamMember {
        &self.scrum_master
    }

    /// Returns the Tester.
    #[must_use]
    pub const fn tester(&self) -> &TeamMember {
        &self.tester
    }

    /// Returns the Product Owner.
    #[must_use]
    pub const fn product_owner(&self) -> &TeamMember {
        &self.product_owner
    }

    /// Returns the developers in the order they joined.
    #[must_use]
    pub fn developers(&self) -> &[TeamMember] {
        &self.developers
    }

    /// Returns the member filling `role`.
    #[must_use]
    pub const fn member(&self, role: ProjectRole) -> &TeamMember {
        match role {
            ProjectRole::ScrumMaster => &self.scrum_master,
            ProjectRole::Tester => &self.tester,
            ProjectRole::ProductOwner => &self.product_owner,
        }
    }

    /// Returns the member filling `role` for mutation.
    pub const fn member_mut(&mut self, role: ProjectRole) -> &mut TeamMember {
        match role {
            ProjectRole::ScrumMaster => &mut self.scrum_master,
            ProjectRole::Tester => &mut self.tester,
            ProjectRole::ProductOwner => &mut self.product_owner,
        }
    }

    /// Adds a developer and returns their identifier.
    pub fn add_developer(&mut self, member: TeamMember) -> TeamMemberId {
        let id = member.id();
        self.developers.push(member);
        id
    }

    /// Returns `true` when `id` belongs to any member of the project.
    #[must_use]
    pub fn has_member(&self, id: TeamMemberId) -> bool {
        [&self.scrum_master, &self.tester, &self.product_owner]
            .into_iter()
            .chain(&self.developers)
            .any(|member| member.id() == id)
    }

    /// Subscribes `receiver` to the member filling `role`.
    pub fn subscribe(&mut self, role: ProjectRole, receiver: Arc<dyn NotificationReceiver>) {
        self.member_mut(role).subscribe(receiver);
    }

    /// Forwards `message` to the subscribers of the member filling `role`.
    pub fn notify(&self, role: ProjectRole, message: &str) {
        self.member(role).notify(message);
    }

    /// Notifies the Scrum Master.
    pub fn notify_scrum_master(&self, message: &str) {
        self.notify(ProjectRole::ScrumMaster, message);
    }

    /// Notifies the Tester.
    pub fn notify_tester(&self, message: &str) {
        self.notify(ProjectRole::Tester, message);
    }

    /// Notifies the Product Owner.
    pub fn notify_product_owner(&self, message: &str) {
        self.notify(ProjectRole::ProductOwner, message);
    }
}
