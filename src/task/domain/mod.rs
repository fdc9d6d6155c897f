//! Domain model for the task list.
//!
//! Validated value types, the task record, and the composition state that
//! collects user input before it becomes a task. Nothing here performs I/O.

mod category;
mod composition;
mod error;
mod ids;
mod platform;
mod task;

pub use category::{Category, CategorySet, DEFAULT_CATEGORY_LABELS};
pub use composition::{CompositionState, DateSelection};
pub use error::TaskDomainError;
pub use ids::{TaskId, TaskText};
pub use platform::{DateEntryMode, Platform};
pub use task::Task;
