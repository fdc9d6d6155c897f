//! Task record stored in the list.

use super::{Category, TaskId, TaskText};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Format used when rendering a due date for display.
const DUE_DATE_FORMAT: &str = "%a %b %d %Y";

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    category: Category,
    completed: bool,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates an incomplete task with no due date.
    #[must_use]
    pub fn new(id: TaskId, text: TaskText, category: Category, clock: &impl Clock) -> Self {
        Self {
            id,
            text,
            category,
            completed: false,
            due_date: None,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the task category.
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Returns `true` once the task has been marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the due date, if one has been set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Renders the due date as shown in a list row, e.g.
    /// `Due on: Sat Oct 17 2026`.
    #[must_use]
    pub fn due_date_label(&self) -> Option<String> {
        self.due_date
            .map(|date| format!("Due on: {}", date.format(DUE_DATE_FORMAT)))
    }

    /// Flips the completion flag.
    pub const fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }

    /// Sets or replaces the due date.
    pub const fn set_due_date(&mut self, date: NaiveDate) {
        self.due_date = Some(date);
    }
}
