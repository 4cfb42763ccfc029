//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record shared by store and view layers.
//! - Normalize and validate user-entered task text.
//!
//! # Invariants
//! - Every task carries a stable `TaskId` that is never reused.
//! - No task with empty or whitespace-only text ever enters a list.

pub mod task;
