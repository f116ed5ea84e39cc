//! Domain model for tasks, the add-task form and progress counters.
//!
//! # Responsibility
//! - Define canonical task data structures used by board logic.
//! - Keep wire naming stable for persisted task lists.
//!
//! # Invariants
//! - Every task is identified by a stable, non-nil `TaskId`.
//! - Deletion removes a task from its owning list; there are no tombstones.

pub mod progress;
pub mod task;
