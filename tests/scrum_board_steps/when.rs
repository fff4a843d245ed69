//! When steps for scrum board BDD scenarios.

use super::world::ScrumBoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use sprintflow::scrum::domain::{BacklogItemId, BacklogTransition, SprintOperation};

fn record_transition(
    world: &mut ScrumBoardWorld,
    id: &str,
    transition: BacklogTransition,
) -> Result<(), eyre::Report> {
    let item_id = BacklogItemId::new(id)?;
    world.last_item_result = Some(world.board.transition(&item_id, transition));
    Ok(())
}

fn require_transitions(
    world: &mut ScrumBoardWorld,
    id: &str,
    transitions: &[BacklogTransition],
) -> Result<(), eyre::Report> {
    let item_id = BacklogItemId::new(id)?;
    for transition in transitions {
        world
            .board
            .transition(&item_id, *transition)
            .wrap_err_with(|| format!("apply {transition:?} to backlog item {item_id}"))?;
    }
    Ok(())
}

fn record_sprint_operation(
    world: &mut ScrumBoardWorld,
    operation: SprintOperation,
) -> Result<(), eyre::Report> {
    let sprint = world.sprint_id()?;
    world.last_sprint_result = Some(world.board.advance_sprint(sprint, operation));
    Ok(())
}

#[when(r#"backlog item "{id}" is moved to doing"#)]
fn move_to_doing(world: &mut ScrumBoardWorld, id: String) -> Result<(), eyre::Report> {
    record_transition(world, &id, BacklogTransition::ToDoing)
}

#[when(r#"backlog item "{id}" is moved to ready for testing"#)]
fn move_to_ready_for_testing(world: &mut ScrumBoardWorld, id: String) -> Result<(), eyre::Report> {
    record_transition(world, &id, BacklogTransition::ToReadyForTesting)
}

#[when(r#"backlog item "{id}" is moved to testing"#)]
fn move_to_testing(world: &mut ScrumBoardWorld, id: String) -> Result<(), eyre::Report> {
    record_transition(world, &id, BacklogTransition::ToTesting)
}

#[when(r#"backlog item "{id}" is moved to done"#)]
fn move_to_done(world: &mut ScrumBoardWorld, id: String) -> Result<(), eyre::Report> {
    record_transition(world, &id, BacklogTransition::ToDone)
}

#[when(r#"backlog item "{id}" is moved to todo"#)]
fn move_to_todo(world: &mut ScrumBoardWorld, id: String) -> Result<(), eyre::Report> {
    record_transition(world, &id, BacklogTransition::ToTodo)
}

#[when(r#"backlog item "{id}" is moved through to tested"#)]
fn move_through_to_tested(world: &mut ScrumBoardWorld, id: String) -> Result<(), eyre::Report> {
    require_transitions(
        world,
        &id,
        &[
            BacklogTransition::ToDoing,
            BacklogTransition::ToReadyForTesting,
            BacklogTransition::ToTesting,
            BacklogTransition::ToTested,
        ],
    )
}

#[when(r#"backlog item "{id}" completes the workflow"#)]
fn complete_workflow(world: &mut ScrumBoardWorld, id: String) -> Result<(), eyre::Report> {
    require_transitions(
        world,
        &id,
        &[
            BacklogTransition::ToDoing,
            BacklogTransition::ToReadyForTesting,
            BacklogTransition::ToTesting,
            BacklogTransition::ToTested,
            BacklogTransition::ToDone,
        ],
    )
}

#[when("the sprint is started")]
fn start_sprint(world: &mut ScrumBoardWorld) -> Result<(), eyre::Report> {
    record_sprint_operation(world, SprintOperation::ToNextState)
}

#[when("the sprint is finished")]
fn finish_sprint(world: &mut ScrumBoardWorld) -> Result<(), eyre::Report> {
    record_sprint_operation(world, SprintOperation::ToNextState)
}

#[when("the sprint is released")]
fn release_sprint(world: &mut ScrumBoardWorld) -> Result<(), eyre::Report> {
    record_sprint_operation(world, SprintOperation::ReleaseSprint)
}

#[when("the sprint is cancelled")]
fn cancel_sprint(world: &mut ScrumBoardWorld) -> Result<(), eyre::Report> {
    record_sprint_operation(world, SprintOperation::CancelSprint)
}

#[when(r#"a review "{review}" is uploaded"#)]
fn upload_review(world: &mut ScrumBoardWorld, review: String) -> Result<(), eyre::Report> {
    let sprint = world.sprint_id()?;
    world.last_review_result = Some(world.board.upload_review(sprint, review));
    Ok(())
}
