//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicktodo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use quicktodo_core::{MemoryStorage, StatusFilter, TaskStore, ViewSession};

fn main() {
    println!("quicktodo_core ping={}", quicktodo_core::ping());
    println!("quicktodo_core version={}", quicktodo_core::core_version());

    // Exercise one add + project round trip against in-memory storage so a
    // smoke run touches the full store/view path.
    let mut store = TaskStore::load(MemoryStorage::new());
    store.add("smoke check");

    let mut session = ViewSession::new();
    session.set_filter(StatusFilter::Active);

    println!(
        "quicktodo_core smoke tasks={} visible={}",
        store.len(),
        session.visible(store.tasks()).len()
    );
}
