//! Core domain logic for QuickTodo.
//! This crate is the single source of truth for task list invariants.

pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_text, Task, TaskId, TaskValidationError};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError, StorageResult};
pub use store::snapshot::{decode_snapshot, encode_snapshot, SnapshotError, SnapshotResult};
pub use store::task_store::{TaskStore, DEFAULT_STORAGE_KEY};
pub use view::projection::{project, StatusFilter};
pub use view::session::ViewSession;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
