//! Application services for Scrum workflow orchestration.

mod board;

pub use board::{CreateSprintRequest, ScrumBoard, ScrumBoardError, ScrumBoardResult};
