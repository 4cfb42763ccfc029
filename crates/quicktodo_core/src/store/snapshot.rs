//! Snapshot encoding for the persisted task list.
//!
//! # Responsibility
//! - Serialize the full task list to the single-key JSON snapshot format.
//! - Decode snapshots strictly: parse failures and invariant-violating
//!   records are both malformed data.
//!
//! # Invariants
//! - The snapshot is a versionless JSON array of task records with fields
//!   `id`, `text`, `completed`, `createdAt`.
//! - Every decoded task satisfies `Task::validate` and ids are unique.

use crate::model::task::{Task, TaskValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Failure while encoding or decoding the persisted snapshot.
#[derive(Debug)]
pub enum SnapshotError {
    /// Value is not valid JSON of the expected shape.
    Parse(serde_json::Error),
    /// A record parsed but violates a list invariant.
    Invalid(TaskValidationError),
    /// Two records share the same id.
    DuplicateId(crate::model::task::TaskId),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed snapshot: {err}"),
            Self::Invalid(err) => write!(f, "invalid snapshot record: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate task id in snapshot: {id}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<TaskValidationError> for SnapshotError {
    fn from(value: TaskValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Serializes the full list, preserving order.
///
/// # Errors
/// - `Parse` when serialization fails (not expected for valid tasks).
pub fn encode_snapshot(tasks: &[Task]) -> SnapshotResult<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Parses a raw snapshot value back into a task list.
///
/// Decoding is strict so that a corrupted snapshot is recovered as a whole
/// (the caller substitutes an empty list) instead of partially.
///
/// # Errors
/// - `Parse` for malformed JSON or wrong shape.
/// - `Invalid` when a record violates text invariants.
/// - `DuplicateId` when two records share an id.
pub fn decode_snapshot(raw: &str) -> SnapshotResult<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        task.validate()?;
        if !seen.insert(task.id) {
            return Err(SnapshotError::DuplicateId(task.id));
        }
    }

    Ok(tasks)
}
