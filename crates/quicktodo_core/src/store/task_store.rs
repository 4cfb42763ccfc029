//! Task store: the list state machine plus write-through persistence.
//!
//! # Responsibility
//! - Provide the mutation entry points: add, toggle, edit, remove,
//!   clear-completed.
//! - Hydrate from the persisted snapshot at startup and write it back after
//!   every mutation.
//!
//! # Invariants
//! - New tasks are prepended; insertion order is authoritative.
//! - Ids are unique within the list and never reused.
//! - A storage failure never corrupts or loses the in-memory list.

use crate::model::task::{normalize_text, Task, TaskId};
use crate::storage::KeyValueStorage;
use crate::store::snapshot::{decode_snapshot, encode_snapshot};
use log::{info, warn};

/// Storage key holding the serialized task list.
pub const DEFAULT_STORAGE_KEY: &str = "quicktodo.tasks";

/// Ordered task list with write-through snapshot persistence.
///
/// All operations are synchronous and infallible from the caller's point of
/// view: invalid input and unknown ids are no-ops, and storage failures are
/// logged and swallowed, leaving the in-memory list authoritative for the
/// rest of the session.
pub struct TaskStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// Hydrates a store from the snapshot under [`DEFAULT_STORAGE_KEY`].
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Hydrates a store from the snapshot under `key`.
    ///
    /// An absent, unreadable, or malformed snapshot yields an empty list;
    /// hydration never fails.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks = match storage.get(&key) {
            Ok(Some(raw)) => match decode_snapshot(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(
                        "event=snapshot_load module=store status=recovered key={key} error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=snapshot_load module=store status=recovered key={key} error={err}");
                Vec::new()
            }
        };

        info!(
            "event=store_hydrated module=store status=ok key={key} tasks={}",
            tasks.len()
        );

        Self {
            storage,
            key,
            tasks,
        }
    }

    /// The current list, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Adds a task from raw user input.
    ///
    /// Input is trimmed; empty input is a no-op returning `None`. Otherwise
    /// a fresh task is prepended and the snapshot rewritten, and the new id
    /// is returned.
    pub fn add(&mut self, raw_text: &str) -> Option<TaskId> {
        let text = normalize_text(raw_text)?;
        let task = Task::new(text);
        let id = task.id;
        self.tasks.insert(0, task);
        self.persist();
        Some(id)
    }

    /// Flips the completion flag on the matching task.
    ///
    /// Returns `false` without persisting when the id is unknown.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        self.persist();
        true
    }

    /// Replaces the text of the matching task from raw user input.
    ///
    /// Input is trimmed; empty input is a cancelled edit and a no-op, same
    /// as an unknown id. Id, completion flag and creation time are
    /// unchanged; position in the list is preserved.
    pub fn edit(&mut self, id: TaskId, raw_text: &str) -> bool {
        let Some(text) = normalize_text(raw_text) else {
            return false;
        };
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.text = text;
        self.persist();
        true
    }

    /// Removes the matching task. Unknown ids are a no-op.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Removes every completed task, returning how many were dropped.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    // One full-snapshot write per successful mutation. Failures are logged
    // and swallowed; the in-memory list stays authoritative.
    fn persist(&mut self) {
        let raw = match encode_snapshot(&self.tasks) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=snapshot_write module=store status=error key={} error={err}",
                    self.key
                );
                return;
            }
        };

        if let Err(err) = self.storage.set(&self.key, &raw) {
            warn!(
                "event=snapshot_write module=store status=error key={} error={err}",
                self.key
            );
        }
    }

    /// Consumes the store, handing back the storage collaborator.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
