//! Runs a sample sprint against console notifications.
//!
//! Usage:
//!
//! ```text
//! sprint_demo [notification-config-path]
//! ```
//!
//! The optional JSON file at `notification-config-path` deserializes into a
//! [`NotificationConfig`], for example:
//!
//! ```json
//! { "email_enabled": true, "slack_enabled": false }
//! ```
//!
//! Set `RUST_LOG=debug` to trace each transition.

use chrono::NaiveDate;
use mockable::DefaultClock;
use sprintflow::notification::{
    adapters::ConsoleWriter,
    domain::TeamMember,
    ports::{NotificationReceiver, Writer},
    services::{NotificationConfig, NotificationConfigError, NotificationService},
};
use sprintflow::scrum::{
    domain::{
        BacklogItem, BacklogItemId, Project, ProjectRole, SprintKind, SprintOperation,
        SprintSchedule,
    },
    services::{CreateSprintRequest, ScrumBoard},
};
use std::env;
use std::fs;
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while preparing the demo.
#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to read notification config: {0}")]
    ConfigRead(#[source] std::io::Error),
    #[error(transparent)]
    ConfigParse(#[from] NotificationConfigError),
    #[error("invalid sprint date")]
    InvalidDate,
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(env::args().nth(1))?;
    run(config)
}

fn load_config(path: Option<String>) -> Result<NotificationConfig, DemoError> {
    let Some(config_path) = path else {
        return Ok(NotificationConfig::default());
    };
    let raw = fs::read_to_string(config_path).map_err(DemoError::ConfigRead)?;
    Ok(NotificationConfig::from_json(&raw)?)
}

fn run(config: NotificationConfig) -> Result<(), BoxError> {
    let writer: Arc<dyn Writer> = Arc::new(ConsoleWriter::new());
    let notifications: Arc<dyn NotificationReceiver> =
        Arc::new(NotificationService::from_config(config, &writer));

    let mut project = Project::new(
        "SO&A 2",
        TeamMember::with_email("Jan de Scrumman", "jandescrumman@gmail.com")?,
        TeamMember::with_email("Henk de Testerman", "henkdetesterman@gmail.com")?,
        TeamMember::new("Jan de Productowner")?,
    )?;
    let developer = project.add_developer(TeamMember::with_email(
        "Linus Torvalds",
        "linustorvalds@gmail.com",
    )?);
    for role in [
        ProjectRole::ScrumMaster,
        ProjectRole::Tester,
        ProjectRole::ProductOwner,
    ] {
        project.subscribe(role, Arc::clone(&notifications));
    }

    let mut board = ScrumBoard::new(Arc::new(DefaultClock));
    let project_id = board.add_project(project);
    let schedule = SprintSchedule::new(
        NaiveDate::from_ymd_opt(2024, 3, 4).ok_or(DemoError::InvalidDate)?,
        NaiveDate::from_ymd_opt(2024, 3, 15).ok_or(DemoError::InvalidDate)?,
    )?;
    let sprint = board.create_sprint(CreateSprintRequest::new(
        project_id,
        "Sprint 1",
        SprintKind::Release,
        schedule,
    ))?;

    let item_id = BacklogItemId::new("1")?;
    let item = BacklogItem::new(item_id.clone(), "Login page", developer, board.clock());
    board.add_backlog_item(sprint, item)?;

    board.advance_sprint(sprint, SprintOperation::ToNextState)?;
    board.move_to_doing(&item_id)?;
    board.move_to_ready_for_testing(&item_id)?;
    board.move_to_testing(&item_id)?;
    board.move_to_tested(&item_id)?;
    board.move_to_done(&item_id)?;
    board.move_to_todo(&item_id)?;
    board.advance_sprint(sprint, SprintOperation::ToNextState)?;
    board.advance_sprint(sprint, SprintOperation::ReleaseSprint)?;
    Ok(())
}
