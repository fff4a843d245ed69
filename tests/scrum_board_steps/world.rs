//! Shared world state for scrum board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use sprintflow::{
    notification::{
        adapters::RecordingWriter,
        domain::TeamMemberId,
        ports::{NotificationReceiver, Writer},
        services::{NotificationConfig, NotificationService},
    },
    scrum::{
        domain::{BacklogItemId, BacklogItemState, ProjectId, SprintId, SprintState},
        services::{ScrumBoard, ScrumBoardError},
    },
};

/// Scenario world for backlog and sprint behaviour tests.
pub struct ScrumBoardWorld {
    pub board: ScrumBoard<DefaultClock>,
    pub project: Option<ProjectId>,
    pub sprint: Option<SprintId>,
    pub developer: Option<TeamMemberId>,
    pub item: Option<BacklogItemId>,
    pub scrum_master: RecordingWriter,
    pub tester: RecordingWriter,
    pub product_owner: RecordingWriter,
    pub last_item_result: Option<Result<BacklogItemState, ScrumBoardError>>,
    pub last_sprint_result: Option<Result<SprintState, ScrumBoardError>>,
    pub last_review_result: Option<Result<(), ScrumBoardError>>,
}

impl ScrumBoardWorld {
    /// Creates a world with an empty board and silent recorders.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: ScrumBoard::new(Arc::new(DefaultClock)),
            project: None,
            sprint: None,
            developer: None,
            item: None,
            scrum_master: RecordingWriter::new(),
            tester: RecordingWriter::new(),
            product_owner: RecordingWriter::new(),
            last_item_result: None,
            last_sprint_result: None,
            last_review_result: None,
        }
    }

    /// Returns the sprint created by the background steps.
    pub fn sprint_id(&self) -> Result<SprintId, eyre::Report> {
        self.sprint
            .ok_or_else(|| eyre::eyre!("missing sprint in scenario world"))
    }

    /// Returns the current backlog item state for `id`.
    pub fn item_state(&self, id: &BacklogItemId) -> Result<BacklogItemState, eyre::Report> {
        self.board
            .backlog_item(id)
            .map(sprintflow::scrum::domain::BacklogItem::state)
            .ok_or_else(|| eyre::eyre!("backlog item {id} is not on the board"))
    }

    /// Returns the total number of lines written to every recorder.
    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.scrum_master.lines().len()
            + self.tester.lines().len()
            + self.product_owner.lines().len()
    }
}

impl Default for ScrumBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ScrumBoardWorld {
    ScrumBoardWorld::default()
}

/// Builds a receiver that sends every enabled channel to `recorder`.
#[must_use]
pub fn receiver_for(recorder: &RecordingWriter) -> Arc<dyn NotificationReceiver> {
    let writer: Arc<dyn Writer> = Arc::new(recorder.clone());
    Arc::new(NotificationService::from_config(
        NotificationConfig::default(),
        &writer,
    ))
}

/// Checks that `recorder` saw `message` on at least one channel.
pub fn ensure_received(
    recorder: &RecordingWriter,
    role: &str,
    message: &str,
) -> Result<(), eyre::Report> {
    let suffix = format!(": {message}");
    let lines = recorder.lines();
    if lines.iter().any(|line| line.ends_with(&suffix)) {
        return Ok(());
    }
    Err(eyre::eyre!(
        "expected the {role} to receive {message:?}, got {lines:?}"
    ))
}
