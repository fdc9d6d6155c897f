//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// A category label is empty after trimming.
    #[error("category label must not be empty")]
    EmptyCategoryLabel,

    /// The category label is not part of the configured category set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The same category label appears more than once in a category set.
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    /// A category set was built without any labels.
    #[error("category set must contain at least one category")]
    EmptyCategorySet,
}
