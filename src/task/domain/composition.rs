//! Transient input state that has not been committed as a task.

use super::{Category, DateEntryMode, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An in-progress due-date selection for one task.
///
/// The presentation layer shows its date affordance exactly while a
/// selection exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSelection {
    /// Task whose due date is being chosen.
    pub task_id: TaskId,
    /// Date the affordance opens on.
    pub initial_date: NaiveDate,
    /// Affordance to render for the configured platform.
    pub entry_mode: DateEntryMode,
}

/// Draft text, chosen category and date-selection target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionState {
    draft_text: String,
    selected_category: Option<Category>,
    date_selection: Option<DateSelection>,
}

impl CompositionState {
    /// Returns the text typed so far.
    #[must_use]
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    /// Returns the selected category, if any.
    #[must_use]
    pub const fn selected_category(&self) -> Option<&Category> {
        self.selected_category.as_ref()
    }

    /// Returns the active date selection, if any.
    #[must_use]
    pub const fn date_selection(&self) -> Option<&DateSelection> {
        self.date_selection.as_ref()
    }

    /// Returns `true` while a due date is being chosen.
    #[must_use]
    pub const fn is_selecting_date(&self) -> bool {
        self.date_selection.is_some()
    }

    pub(crate) fn set_draft_text(&mut self, text: String) {
        self.draft_text = text;
    }

    pub(crate) fn select_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
    }

    pub(crate) fn begin_date_selection(&mut self, selection: DateSelection) {
        self.date_selection = Some(selection);
    }

    pub(crate) fn end_date_selection(&mut self) -> Option<DateSelection> {
        self.date_selection.take()
    }

    /// Clears draft text and category after a task has been added.
    pub(crate) fn reset_draft(&mut self) {
        self.draft_text.clear();
        self.selected_category = None;
    }
}
