//! To-do list state management.
//!
//! A [`TaskListStore`](services::TaskListStore) owns an ordered list of
//! tasks and the composition state a user fills in before adding one. A
//! presentation layer renders [`StoreSnapshot`](services::StoreSnapshot)s
//! and forwards user gestures as intents. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store itself in [`services`]
//! - Static configuration in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
