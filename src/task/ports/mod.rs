//! Port contracts for the task list.
//!
//! Ports define the seams the store depends on without fixing an
//! implementation.

pub mod id_generator;

pub use id_generator::TaskIdGenerator;
