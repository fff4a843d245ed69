//! Domain model for the Scrum workflow.
//!
//! Projects own their team members. Sprints and backlog items refer back to
//! their owners by identifier only; resolution happens in the service layer.

mod backlog_item;
mod backlog_state;
mod error;
mod ids;
mod project;
mod role;
mod sprint;
mod sprint_state;

pub use backlog_item::BacklogItem;
pub use backlog_state::{BacklogItemState, BacklogTransition};
pub use error::{ParseBacklogItemStateError, ParseSprintStateError, ScrumDomainError};
pub use ids::{BacklogItemId, ProjectId, SprintId};
pub use project::Project;
pub use role::{ProjectRole, RoleNotification};
pub use sprint::{Sprint, SprintSchedule};
pub use sprint_state::{SprintKind, SprintOperation, SprintState};
