//! Shared world state for task list BDD scenarios.

use rstest::fixture;
use todo_store::task::{
    domain::{Task, TaskId},
    services::TaskListStore,
};

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    pub store: TaskListStore,
}

impl TaskListWorld {
    /// Creates a world around an empty store with the default categories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskListStore::default(),
        }
    }

    /// Finds the task with the given text.
    ///
    /// # Errors
    ///
    /// Returns an error when no task carries the text.
    pub fn task_named(&self, text: &str) -> Result<&Task, eyre::Report> {
        self.store
            .tasks()
            .iter()
            .find(|task| task.text().as_str() == text)
            .ok_or_else(|| eyre::eyre!("no task with text {text:?}"))
    }

    /// Returns the identifier of the task with the given text.
    ///
    /// # Errors
    ///
    /// Returns an error when no task carries the text.
    pub fn id_of(&self, text: &str) -> Result<TaskId, eyre::Report> {
        self.task_named(text).map(|task| task.id().clone())
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}
