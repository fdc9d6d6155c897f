//! Shared fixtures for task list unit tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

use crate::task::{
    adapters::ids::SequentialIdGenerator, config::StoreConfig, services::TaskListStore,
};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Store type used across unit tests.
pub type TestStore = TaskListStore<SequentialIdGenerator, FixedClock>;

#[fixture]
pub fn clock() -> FixedClock {
    let instant = Utc
        .with_ymd_and_hms(2026, 10, 17, 12, 0, 0)
        .single()
        .unwrap_or_default();
    FixedClock(instant)
}

#[fixture]
pub fn store(clock: FixedClock) -> TestStore {
    TaskListStore::with_parts(
        StoreConfig::default(),
        SequentialIdGenerator::new(),
        Arc::new(clock),
    )
}
