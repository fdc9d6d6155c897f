//! When steps for task list BDD scenarios.

use super::world::TaskListWorld;
use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the user types "{text}""#)]
fn user_types(world: &mut TaskListWorld, text: String) {
    world.store.set_draft_text(text);
}

#[when(r#"the user selects the "{label}" category"#)]
fn user_selects_category(world: &mut TaskListWorld, label: String) -> Result<(), eyre::Report> {
    world
        .store
        .select_category(&label)
        .wrap_err("select category in scenario")
}

#[when("the user submits the draft")]
fn user_submits_draft(world: &mut TaskListWorld) {
    let _ = world.store.submit_draft();
}

#[when(r#"the user removes task "{text}""#)]
fn user_removes_task(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&text)?;
    eyre::ensure!(world.store.remove_task(&id), "task {text:?} was not removed");
    Ok(())
}

#[when(r#"the user toggles task "{text}""#)]
fn user_toggles_task(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&text)?;
    eyre::ensure!(world.store.toggle_completion(&id), "task {text:?} was not toggled");
    Ok(())
}

#[when(r#"the user starts choosing a due date for task "{text}""#)]
fn user_starts_date_selection(
    world: &mut TaskListWorld,
    text: String,
) -> Result<(), eyre::Report> {
    let id = world.id_of(&text)?;
    eyre::ensure!(
        world.store.begin_due_date_selection(&id),
        "date selection did not start for {text:?}"
    );
    Ok(())
}

#[when(r#"the user picks the date "{date}""#)]
fn user_picks_date(world: &mut TaskListWorld, date: String) -> Result<(), eyre::Report> {
    let due = NaiveDate::parse_from_str(&date, "%Y-%m-%d").wrap_err("parse scenario date")?;
    eyre::ensure!(
        world.store.commit_due_date(Some(due)),
        "due date {date} was not applied"
    );
    Ok(())
}

#[when("the user dismisses the date selection")]
fn user_dismisses_date_selection(world: &mut TaskListWorld) {
    world.store.cancel_due_date_selection();
}
