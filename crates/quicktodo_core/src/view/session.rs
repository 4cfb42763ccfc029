//! Transient per-session view state.
//!
//! # Responsibility
//! - Hold the presentation-layer state the store does not own: current
//!   filter, search text, and which task (if any) is being edited.
//!
//! # Invariants
//! - At most one task is in editing state at a time.
//! - Session state never outlives the process; nothing here is persisted.

use crate::model::task::{Task, TaskId};
use crate::view::projection::{project, StatusFilter};

/// View state for one UI session.
#[derive(Debug, Default)]
pub struct ViewSession {
    filter: StatusFilter,
    search: String,
    editing: Option<TaskId>,
}

impl ViewSession {
    /// Starts a session with filter `All`, blank search, nothing editing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// Switches the status filter. All transitions are free.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Id of the task currently being edited, if any.
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    /// Enters editing state for `id`.
    ///
    /// Requesting an edit while another task is being edited moves the
    /// single editing slot; the previous edit is implicitly discarded.
    pub fn begin_edit(&mut self, id: TaskId) {
        self.editing = Some(id);
    }

    /// Leaves editing state, returning the id whose edit should be saved.
    ///
    /// The caller commits the text change through the store; an empty-save
    /// there is a no-op, which matches discarding the edit.
    pub fn commit_edit(&mut self) -> Option<TaskId> {
        self.editing.take()
    }

    /// Leaves editing state discarding any pending change.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Projects the displayed sequence using this session's filter/search.
    pub fn visible<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        project(tasks, self.filter, &self.search)
    }
}
