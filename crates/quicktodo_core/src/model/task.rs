//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its serialized shape.
//! - Provide text normalization shared by create and edit paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty and trimmed for every task accepted into a list.
//! - `created_at` is immutable after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// A single to-do item.
///
/// The serialized field names match the persisted snapshot schema, so this
/// one struct is both the in-memory record and the storage record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID, assigned at creation.
    pub id: TaskId,
    /// User-entered text, always trimmed and non-empty.
    pub text: String,
    /// Completion flag, starts `false`.
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds. Not used for ordering;
    /// insertion order is authoritative.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Validation failure for a task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// `text` is empty or whitespace-only.
    EmptyText(TaskId),
    /// `text` carries leading or trailing whitespace.
    UntrimmedText(TaskId),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText(id) => write!(f, "task {id} has empty text"),
            Self::UntrimmedText(id) => write!(f, "task {id} has untrimmed text"),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Creates a new task from already-normalized text.
    ///
    /// # Invariants
    /// - A fresh `TaskId` is generated; ids are never reused.
    /// - `completed` starts as `false`.
    /// - `created_at` is stamped from the wall clock.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_parts(Uuid::new_v4(), text, false, now_epoch_ms())
    }

    /// Creates a task from explicit parts.
    ///
    /// Used by hydration and tests where identity and timestamps already
    /// exist. Does not validate; call [`Task::validate`] when the source is
    /// untrusted.
    pub fn with_parts(
        id: TaskId,
        text: impl Into<String>,
        completed: bool,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
            created_at,
        }
    }

    /// Checks the list invariants on this record.
    ///
    /// # Errors
    /// - `EmptyText` when `text` trims to nothing.
    /// - `UntrimmedText` when `text` differs from its trimmed form.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText(self.id));
        }
        if trimmed != self.text {
            return Err(TaskValidationError::UntrimmedText(self.id));
        }
        Ok(())
    }
}

/// Trims raw user input into storable task text.
///
/// Returns `None` when the input is empty after trimming; callers treat that
/// as a no-op (rejected add, cancelled edit), never as an error.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Current wall clock in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{normalize_text, now_epoch_ms, Task, TaskValidationError};
    use uuid::Uuid;

    #[test]
    fn new_task_starts_active_with_fresh_id() {
        let a = Task::new("write report");
        let b = Task::new("write report");
        assert!(!a.completed);
        assert_ne!(a.id, b.id);
        assert!(a.created_at > 0);
    }

    #[test]
    fn normalize_text_trims_and_rejects_blank() {
        assert_eq!(normalize_text("  buy milk "), Some("buy milk".to_string()));
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   \t "), None);
    }

    #[test]
    fn validate_rejects_empty_and_untrimmed_text() {
        let id = Uuid::new_v4();
        let empty = Task::with_parts(id, "  ", false, 0);
        assert_eq!(empty.validate(), Err(TaskValidationError::EmptyText(id)));

        let untrimmed = Task::with_parts(id, " x", false, 0);
        assert_eq!(
            untrimmed.validate(),
            Err(TaskValidationError::UntrimmedText(id))
        );

        let ok = Task::with_parts(id, "x", true, 0);
        assert_eq!(ok.validate(), Ok(()));
    }

    #[test]
    fn serialized_field_names_match_snapshot_schema() {
        let task = Task::with_parts(Uuid::nil(), "call mom", true, 1_700_000_000_000);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["text"], "call mom");
        assert_eq!(json["completed"], true);
        assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn now_epoch_ms_is_monotonic_enough() {
        let earlier = now_epoch_ms();
        assert!(now_epoch_ms() >= earlier);
    }
}
