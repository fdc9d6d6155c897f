//! Task identifier generators.

use std::sync::Arc;

use mockable::Clock;
use uuid::Uuid;

use crate::task::{domain::TaskId, ports::TaskIdGenerator};

/// Generates `1`, `2`, `3`, ... for the lifetime of the generator.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first identifier is `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let current = self.next;
        self.next = self.next.wrapping_add(1);
        TaskId::new(current.to_string())
    }
}

/// Generates identifiers from the clock's Unix time in milliseconds.
///
/// Calls landing in the same millisecond (or a clock that steps backwards)
/// get the previous value plus one, so identifiers strictly increase.
#[derive(Debug)]
pub struct TimestampIdGenerator<C: Clock> {
    clock: Arc<C>,
    last: Option<i64>,
}

impl<C: Clock> TimestampIdGenerator<C> {
    /// Creates a generator reading time from `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock, last: None }
    }
}

impl<C: Clock> TaskIdGenerator for TimestampIdGenerator<C> {
    fn next_id(&mut self) -> TaskId {
        let now = self.clock.utc().timestamp_millis();
        let value = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(value);
        TaskId::new(value.to_string())
    }
}

/// Generates random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl TaskIdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TaskId {
        TaskId::new(Uuid::new_v4().to_string())
    }
}
