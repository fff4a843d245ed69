//! Sprintflow: Scrum workflow tracking with role notifications.
//!
//! This crate models projects, sprints and backlog items moving through a
//! fixed workflow, and notifies the Scrum Master, Tester and Product Owner
//! by email and Slack when specific transitions happen.
//!
//! # Architecture
//!
//! Sprintflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state machines with no I/O; transitions return the
//!   notifications they trigger
//! - **Ports**: Trait interfaces for output sinks and notification receivers
//! - **Adapters**: Email, Slack, console and recording implementations
//! - **Services**: Orchestration that routes notifications to team members
//!
//! # Modules
//!
//! - [`notification`]: Team members, messaging channels and fan-out
//! - [`scrum`]: Projects, sprints, backlog items and the board service

pub mod notification;
pub mod scrum;
