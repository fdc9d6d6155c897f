//! Port for producing task identifiers.

use crate::task::domain::TaskId;

/// Source of fresh task identifiers.
///
/// Implementations must not return the same identifier twice in a row,
/// even when called in immediate succession. The store still checks each
/// identifier against the current collection before using it.
#[cfg_attr(test, mockall::automock)]
pub trait TaskIdGenerator {
    /// Produces the next identifier.
    fn next_id(&mut self) -> TaskId;
}

impl<G: TaskIdGenerator + ?Sized> TaskIdGenerator for Box<G> {
    fn next_id(&mut self) -> TaskId {
        (**self).next_id()
    }
}
