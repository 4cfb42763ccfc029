//! Derived-view computation.
//!
//! # Responsibility
//! - Project the displayed task sequence from the list plus transient view
//!   state (status filter, search query).
//! - Model the per-session view state machine, including the single
//!   editing slot.
//!
//! # Invariants
//! - Projection is pure: no mutation, deterministic, order preserving.

pub mod projection;
pub mod session;
