//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then("the list holds {count:usize} tasks")]
fn list_holds(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.store.len() == count,
        "expected {count} tasks, found {}",
        world.store.len()
    );
    Ok(())
}

#[then(r#"task "{text}" is in category "{label}""#)]
fn task_in_category(world: &TaskListWorld, text: String, label: String) -> Result<(), eyre::Report> {
    let task = world.task_named(&text)?;
    eyre::ensure!(
        task.category().as_str() == label,
        "expected category {label}, found {}",
        task.category()
    );
    Ok(())
}

#[then(r#"task "{text}" is completed"#)]
fn task_completed(world: &TaskListWorld, text: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.task_named(&text)?.is_completed(),
        "task {text:?} should be completed"
    );
    Ok(())
}

#[then(r#"task "{text}" is not completed"#)]
fn task_not_completed(world: &TaskListWorld, text: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !world.task_named(&text)?.is_completed(),
        "task {text:?} should not be completed"
    );
    Ok(())
}

#[then(r#"task "{text}" has no due date"#)]
fn task_without_due_date(world: &TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let due = world.task_named(&text)?.due_date();
    eyre::ensure!(due.is_none(), "expected no due date, found {due:?}");
    Ok(())
}

#[then(r#"task "{text}" is due on "{date}""#)]
fn task_due_on(world: &TaskListWorld, text: String, date: String) -> Result<(), eyre::Report> {
    let expected =
        NaiveDate::parse_from_str(&date, "%Y-%m-%d").wrap_err("parse scenario date")?;
    let due = world.task_named(&text)?.due_date();
    eyre::ensure!(due == Some(expected), "expected due date {expected}, found {due:?}");
    Ok(())
}

#[then("the draft is cleared")]
fn draft_cleared(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let composition = world.store.composition();
    eyre::ensure!(composition.draft_text().is_empty(), "draft text not cleared");
    eyre::ensure!(
        composition.selected_category().is_none(),
        "selected category not cleared"
    );
    Ok(())
}

#[then(r#"the task texts in order are "{texts}""#)]
fn task_texts_in_order(world: &TaskListWorld, texts: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = texts.split(", ").collect();
    let actual: Vec<&str> = world
        .store
        .tasks()
        .iter()
        .map(|task| task.text().as_str())
        .collect();
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then("no date selection is active")]
fn no_date_selection(world: &TaskListWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !world.store.composition().is_selecting_date(),
        "date selection is still active"
    );
    Ok(())
}
