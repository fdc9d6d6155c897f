//! todo-store: state core for a to-do list front-end.
//!
//! The crate keeps an in-memory, insertion-ordered list of tasks together
//! with the transient input state (draft text, chosen category, due-date
//! selection) a user interface collects before committing a task. It has no
//! persistence and performs no I/O; rendering belongs to the caller.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Validated values and the task record
//! - **Ports**: Trait seams such as identifier generation
//! - **Adapters**: Concrete identifier generators
//! - **Services**: The store and its intents
//!
//! # Modules
//!
//! - [`task`]: Task list store, domain model and configuration
//! - [`telemetry`]: Tracing subscriber setup for embedding applications

pub mod task;
pub mod telemetry;
