//! Then steps for scrum board BDD scenarios.

use super::world::{ScrumBoardWorld, ensure_received};
use rstest_bdd_macros::then;
use sprintflow::scrum::{
    domain::{BacklogItemState, ScrumDomainError, SprintState},
    services::ScrumBoardError,
};

#[then(r#"the item state is "{state}""#)]
fn item_state_is(world: &ScrumBoardWorld, state: String) -> Result<(), eyre::Report> {
    let expected_state = BacklogItemState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;
    let item = world
        .item
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing backlog item in scenario world"))?;

    let actual = world.item_state(item)?;
    if actual != expected_state {
        return Err(eyre::eyre!(
            "expected state {}, found {}",
            expected_state.as_str(),
            actual.as_str()
        ));
    }
    Ok(())
}

#[then(r#"the transition fails with "{message}""#)]
fn transition_fails_with(world: &ScrumBoardWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_item_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    let reason = result
        .as_ref()
        .err()
        .and_then(ScrumBoardError::illegal_state_advance);
    if reason != Some(message.as_str()) {
        return Err(eyre::eyre!(
            "expected IllegalStateAdvance({message:?}), got {result:?}"
        ));
    }
    Ok(())
}

#[then("no notifications were sent")]
fn no_notifications_sent(world: &ScrumBoardWorld) -> Result<(), eyre::Report> {
    let count = world.notification_count();
    if count != 0 {
        return Err(eyre::eyre!("expected no notifications, found {count}"));
    }
    Ok(())
}

#[then(r#"the scrum master received "{message}""#)]
fn scrum_master_received(world: &ScrumBoardWorld, message: String) -> Result<(), eyre::Report> {
    ensure_received(&world.scrum_master, "scrum master", &message)
}

#[then(r#"the tester received "{message}""#)]
fn tester_received(world: &ScrumBoardWorld, message: String) -> Result<(), eyre::Report> {
    ensure_received(&world.tester, "tester", &message)
}

#[then(r#"the product owner received "{message}""#)]
fn product_owner_received(world: &ScrumBoardWorld, message: String) -> Result<(), eyre::Report> {
    ensure_received(&world.product_owner, "product owner", &message)
}

#[then(r#"the sprint state is "{state}""#)]
fn sprint_state_is(world: &ScrumBoardWorld, state: String) -> Result<(), eyre::Report> {
    let expected_state = SprintState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected sprint state in scenario: {err}"))?;
    let sprint_id = world.sprint_id()?;
    let sprint = world
        .board
        .sprint(sprint_id)
        .ok_or_else(|| eyre::eyre!("sprint {sprint_id} is not on the board"))?;

    if sprint.state() != expected_state {
        return Err(eyre::eyre!(
            "expected sprint state {}, found {}",
            expected_state.as_str(),
            sprint.state().as_str()
        ));
    }
    Ok(())
}

#[then("the review upload is not permitted")]
fn review_upload_not_permitted(world: &ScrumBoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_review_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing review upload result"))?;

    if !matches!(
        result,
        Err(ScrumBoardError::Domain(
            ScrumDomainError::OperationNotPermitted(_)
        ))
    ) {
        return Err(eyre::eyre!(
            "expected OperationNotPermitted error, got {result:?}"
        ));
    }
    Ok(())
}
