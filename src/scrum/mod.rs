//! Scrum workflow: projects, sprints and backlog items.
//!
//! Backlog items move along Todo → Doing → Ready For Testing → Testing →
//! Tested → Done, with the backward moves Done → Todo and Ready For Testing
//! → Todo. Sprints progress through their own lifecycle and end in a
//! Released, Reviewed or Cancelled state. Domain transitions are pure: they
//! return the role notifications to send, and [`services::ScrumBoard`]
//! routes those notifications through the owning project's team members.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
