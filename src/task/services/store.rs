//! The task list store: ordered tasks plus composition state, mutated by
//! user intents.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::task::{
    adapters::ids::SequentialIdGenerator,
    config::StoreConfig,
    domain::{
        Category, CategorySet, CompositionState, DateEntryMode, DateSelection, Task,
        TaskDomainError, TaskId, TaskText,
    },
    ports::TaskIdGenerator,
};

/// Number of identifiers drawn before an add is abandoned because every one
/// of them was already in use.
const MAX_ID_ATTEMPTS: usize = 8;

/// Owned copy of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Draft input and date-selection state.
    pub composition: CompositionState,
    /// Categories offered for new tasks.
    pub categories: CategorySet,
}

/// In-memory task list and its composition state.
///
/// Every intent is total: input that cannot be applied (blank text, no
/// category, unknown task id) leaves the store unchanged instead of
/// returning an error. Intents report whether they changed anything so
/// callers can skip a re-render.
#[derive(Debug)]
pub struct TaskListStore<G = SequentialIdGenerator, C = DefaultClock>
where
    G: TaskIdGenerator,
    C: Clock,
{
    config: StoreConfig,
    tasks: Vec<Task>,
    composition: CompositionState,
    ids: G,
    clock: Arc<C>,
}

impl TaskListStore {
    /// Creates an empty store with sequential identifiers and the system
    /// clock.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_parts(
            config,
            SequentialIdGenerator::new(),
            Arc::new(DefaultClock),
        )
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl<G, C> TaskListStore<G, C>
where
    G: TaskIdGenerator,
    C: Clock,
{
    /// Creates an empty store from explicit collaborators.
    #[must_use]
    pub fn with_parts(config: StoreConfig, ids: G, clock: Arc<C>) -> Self {
        Self {
            config,
            tasks: Vec::new(),
            composition: CompositionState::default(),
            ids,
            clock,
        }
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the composition state.
    #[must_use]
    pub const fn composition(&self) -> &CompositionState {
        &self.composition
    }

    /// Returns the configured categories.
    #[must_use]
    pub const fn categories(&self) -> &CategorySet {
        &self.config.categories
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Copies the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            tasks: self.tasks.clone(),
            composition: self.composition.clone(),
            categories: self.config.categories.clone(),
        }
    }

    /// Replaces the draft text.
    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.composition.set_draft_text(text.into());
        trace!(draft = self.composition.draft_text(), "draft text updated");
    }

    /// Selects the category with the given label for the next task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownCategory`] when the label is not in
    /// the configured set; the current selection is kept.
    pub fn select_category(&mut self, label: &str) -> Result<(), TaskDomainError> {
        let category = self.config.categories.resolve(label)?.clone();
        trace!(category = %category, "category selected");
        self.composition.select_category(Some(category));
        Ok(())
    }

    /// Clears the selected category.
    pub fn clear_category(&mut self) {
        self.composition.select_category(None);
    }

    /// Adds a task built from the draft text and selected category.
    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let text = self.composition.draft_text().to_owned();
        let category = self.composition.selected_category().cloned();
        self.add_task(&text, category.as_ref())
    }

    /// Appends a new task and clears the draft.
    ///
    /// Nothing happens when `text` is blank, when `category` is `None`, or
    /// when the category is not one of the configured ones. Returns the new
    /// task's identifier when a task was added.
    pub fn add_task(&mut self, text: &str, category: Option<&Category>) -> Option<TaskId> {
        let Some(selected) = category else {
            debug!("add ignored: no category selected");
            return None;
        };
        if !self.config.categories.contains(selected) {
            debug!(category = %selected, "add ignored: category not configured");
            return None;
        }
        let Ok(task_text) = TaskText::new(text) else {
            debug!("add ignored: task text is blank");
            return None;
        };

        let id = self.fresh_id()?;
        self.tasks.push(Task::new(
            id.clone(),
            task_text,
            selected.clone(),
            &*self.clock,
        ));
        self.composition.reset_draft();
        debug!(task_id = %id, category = %selected, "task added");
        Some(id)
    }

    /// Removes the task with the given identifier.
    ///
    /// An active date selection targeting the task is dismissed with it.
    /// Returns `false` when no such task exists.
    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            debug!(task_id = %id, "remove ignored: unknown task");
            return false;
        };
        self.tasks.remove(position);

        let targets_removed = self
            .composition
            .date_selection()
            .is_some_and(|selection| &selection.task_id == id);
        if targets_removed {
            self.composition.end_date_selection();
        }
        debug!(task_id = %id, "task removed");
        true
    }

    /// Flips the completion flag of a task.
    ///
    /// Returns `false` when no such task exists.
    pub fn toggle_completion(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.find_mut(id) else {
            debug!(task_id = %id, "toggle ignored: unknown task");
            return false;
        };
        task.toggle_completion();
        debug!(task_id = %id, completed = task.is_completed(), "completion toggled");
        true
    }

    /// Starts choosing a due date for a task.
    ///
    /// Replaces any selection already in progress. The selection opens on
    /// the task's current due date, or today when it has none. Returns
    /// `false`, and starts nothing, when no such task exists.
    pub fn begin_due_date_selection(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.task(id) else {
            debug!(task_id = %id, "date selection ignored: unknown task");
            return false;
        };
        let initial_date = task
            .due_date()
            .unwrap_or_else(|| self.clock.local().date_naive());
        let selection = DateSelection {
            task_id: id.clone(),
            initial_date,
            entry_mode: DateEntryMode::for_platform(self.config.platform),
        };
        debug!(
            task_id = %id,
            platform = self.config.platform.as_str(),
            entry_mode = ?selection.entry_mode,
            "date selection started"
        );
        self.composition.begin_date_selection(selection);
        true
    }

    /// Dismisses the date selection without touching any task.
    pub fn cancel_due_date_selection(&mut self) {
        if let Some(selection) = self.composition.end_date_selection() {
            debug!(task_id = %selection.task_id, "date selection cancelled");
        }
    }

    /// Applies the outcome of a date selection to a task.
    ///
    /// The date selection is dismissed in every case. With `Some(date)` the
    /// task's due date is set; `None` means the user cancelled and no task
    /// changes. Returns `true` when a due date was written.
    pub fn set_due_date(&mut self, id: &TaskId, date: Option<NaiveDate>) -> bool {
        self.composition.end_date_selection();

        let Some(due) = date else {
            debug!(task_id = %id, "due date unchanged: selection cancelled");
            return false;
        };
        let Some(task) = self.find_mut(id) else {
            debug!(task_id = %id, "due date ignored: unknown task");
            return false;
        };
        task.set_due_date(due);
        debug!(task_id = %id, due_date = %due, "due date set");
        true
    }

    /// Applies the outcome of the active date selection to its target task.
    ///
    /// Returns `false` when no selection is active.
    pub fn commit_due_date(&mut self, date: Option<NaiveDate>) -> bool {
        let Some(target) = self
            .composition
            .date_selection()
            .map(|selection| selection.task_id.clone())
        else {
            debug!("due date ignored: no date selection active");
            return false;
        };
        self.set_due_date(&target, date)
    }

    fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Draws identifiers until one is not used by any task in the list.
    fn fresh_id(&mut self) -> Option<TaskId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if self.task(&id).is_none() {
                return Some(id);
            }
            debug!(task_id = %id, "generated id already in use");
        }
        warn!(
            attempts = MAX_ID_ATTEMPTS,
            "add withheld: could not generate an unused task id"
        );
        None
    }
}
