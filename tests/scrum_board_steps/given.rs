//! Given steps for scrum board BDD scenarios.

use super::world::{ScrumBoardWorld, receiver_for};
use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use sprintflow::{
    notification::domain::TeamMember,
    scrum::{
        domain::{BacklogItem, BacklogItemId, Project, ProjectRole, SprintKind, SprintSchedule},
        services::CreateSprintRequest,
    },
};

#[given("a project with a scrum master and a tester")]
fn project_with_roles(world: &mut ScrumBoardWorld) -> Result<(), eyre::Report> {
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
    project.subscribe(ProjectRole::ScrumMaster, receiver_for(&world.scrum_master));
    project.subscribe(ProjectRole::Tester, receiver_for(&world.tester));
    project.subscribe(ProjectRole::ProductOwner, receiver_for(&world.product_owner));

    world.developer = Some(developer);
    world.project = Some(world.board.add_project(project));
    Ok(())
}

#[given(r#"a release sprint with backlog item "{id}""#)]
fn release_sprint_with_item(world: &mut ScrumBoardWorld, id: String) -> Result<(), eyre::Report> {
    let project = world
        .project
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    let developer = world
        .developer
        .ok_or_else(|| eyre::eyre!("missing developer in scenario world"))?;
    let starts_on = NaiveDate::from_ymd_opt(2024, 3, 4)
        .ok_or_else(|| eyre::eyre!("invalid sprint start date"))?;
    let ends_on = NaiveDate::from_ymd_opt(2024, 3, 15)
        .ok_or_else(|| eyre::eyre!("invalid sprint end date"))?;
    let sprint = world
        .board
        .create_sprint(CreateSprintRequest::new(
            project,
            "Sprint 1",
            SprintKind::Release,
            SprintSchedule::new(starts_on, ends_on)?,
        ))
        .wrap_err("create sprint for scenario")?;

    let item_id = BacklogItemId::new(id)?;
    let item = BacklogItem::new(
        item_id.clone(),
        "Login page",
        developer,
        world.board.clock(),
    );
    world
        .board
        .add_backlog_item(sprint, item)
        .wrap_err("plan backlog item for scenario")?;

    world.sprint = Some(sprint);
    world.item = Some(item_id);
    Ok(())
}

#[given(r#"backlog item "{parent}" has activity "{activity}""#)]
fn item_has_activity(
    world: &mut ScrumBoardWorld,
    parent: String,
    activity: String,
) -> Result<(), eyre::Report> {
    let developer = world
        .developer
        .ok_or_else(|| eyre::eyre!("missing developer in scenario world"))?;
    let activity_item = BacklogItem::new(
        BacklogItemId::new(activity)?,
        "Write migration",
        developer,
        world.board.clock(),
    );
    world
        .board
        .add_activity(&BacklogItemId::new(parent)?, activity_item)
        .wrap_err("add activity for scenario")?;
    Ok(())
}
