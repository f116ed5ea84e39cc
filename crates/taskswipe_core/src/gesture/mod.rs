//! Swipe gesture handling for task list items.
//!
//! # Responsibility
//! - Classify one pointer interaction per UI surface into a swipe action.
//! - Derive render-time drag feedback from the live gesture state.
//!
//! # Invariants
//! - At most one item is tracked at a time.
//! - Commit decisions happen only at interaction end, never mid-drag.
//! - Every input maps to a defined result; nothing here returns errors.

pub mod classifier;
pub mod config;
pub mod feedback;
