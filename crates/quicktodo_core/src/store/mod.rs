//! Task store and snapshot persistence.
//!
//! # Responsibility
//! - Own the ordered task list and its mutation entry points.
//! - Keep snapshot serialization details inside the store boundary.
//!
//! # Invariants
//! - The in-memory list is the single source of truth for a session.
//! - Every successful mutation issues exactly one full snapshot write.

pub mod snapshot;
pub mod task_store;
