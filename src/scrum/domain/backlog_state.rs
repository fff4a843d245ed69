//! Backlog item workflow states and transitions.

use super::ParseBacklogItemStateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow state of a backlog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogItemState {
    /// Work has not started.
    Todo,
    /// Work is in progress.
    Doing,
    /// Implementation is complete and waiting for a tester.
    ReadyForTesting,
    /// A tester is verifying the work.
    Testing,
    /// Testing has passed.
    Tested,
    /// The item is complete.
    Done,
}

impl BacklogItemState {
    /// Every state in workflow order.
    pub const ALL: [Self; 6] = [
        Self::Todo,
        Self::Doing,
        Self::ReadyForTesting,
        Self::Testing,
        Self::Tested,
        Self::Done,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::ReadyForTesting => "ready_for_testing",
            Self::Testing => "testing",
            Self::Tested => "tested",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable name used in notification messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Doing => "Doing",
            Self::ReadyForTesting => "Ready For Testing",
            Self::Testing => "Testing",
            Self::Tested => "Tested",
            Self::Done => "Done",
        }
    }

    /// Returns `true` when the workflow allows moving from `self` to
    /// `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Todo, Self::Doing)
                | (Self::Doing, Self::ReadyForTesting)
                | (Self::ReadyForTesting, Self::Testing | Self::Todo)
                | (Self::Testing, Self::Tested)
                | (Self::Tested, Self::Done)
                | (Self::Done, Self::Todo)
        )
    }
}

impl fmt::Display for BacklogItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl TryFrom<&str> for BacklogItemState {
    type Error = ParseBacklogItemStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "ready_for_testing" => Ok(Self::ReadyForTesting),
            "testing" => Ok(Self::Testing),
            "tested" => Ok(Self::Tested),
            "done" => Ok(Self::Done),
            _ => Err(ParseBacklogItemStateError(value.to_owned())),
        }
    }
}

/// A requested move of a backlog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogTransition {
    /// Start working on the item.
    ToDoing,
    /// Hand the item over for testing.
    ToReadyForTesting,
    /// Begin testing.
    ToTesting,
    /// Mark testing as passed.
    ToTested,
    /// Complete the item.
    ToDone,
    /// Send the item back to the start of the workflow.
    ToTodo,
}

impl BacklogTransition {
    /// Returns the state this transition moves to.
    #[must_use]
    pub const fn target(self) -> BacklogItemState {
        match self {
            Self::ToDoing => BacklogItemState::Doing,
            Self::ToReadyForTesting => BacklogItemState::ReadyForTesting,
            Self::ToTesting => BacklogItemState::Testing,
            Self::ToTested => BacklogItemState::Tested,
            Self::ToDone => BacklogItemState::Done,
            Self::ToTodo => BacklogItemState::Todo,
        }
    }
}
