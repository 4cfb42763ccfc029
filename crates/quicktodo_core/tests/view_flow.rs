use quicktodo_core::{project, MemoryStorage, StatusFilter, TaskStore, ViewSession};

#[test]
fn projection_over_a_live_store_follows_mutations() {
    let mut store = TaskStore::load(MemoryStorage::new());
    let milk = store.add("Buy milk").unwrap();
    let mom = store.add("Call mom").unwrap();
    store.toggle(mom);

    let done = project(store.tasks(), StatusFilter::Done, "");
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, mom);

    let milk_hits = project(store.tasks(), StatusFilter::All, "milk");
    assert_eq!(milk_hits.len(), 1);
    assert_eq!(milk_hits[0].id, milk);

    // The projection is a view; the underlying list is untouched.
    assert_eq!(store.len(), 2);
}

#[test]
fn edit_flow_commits_through_the_session_state_machine() {
    let mut store = TaskStore::load(MemoryStorage::new());
    let id = store.add("drafty wording").unwrap();

    let mut session = ViewSession::new();
    session.begin_edit(id);

    let target = session.commit_edit().unwrap();
    assert!(store.edit(target, "final wording"));
    assert_eq!(store.tasks()[0].text, "final wording");
    assert_eq!(session.editing(), None);
}

#[test]
fn empty_save_discards_the_edit_like_a_cancel() {
    let mut store = TaskStore::load(MemoryStorage::new());
    let id = store.add("Buy milk").unwrap();

    let mut session = ViewSession::new();
    session.begin_edit(id);

    let target = session.commit_edit().unwrap();
    assert!(!store.edit(target, "   "));
    assert_eq!(store.tasks()[0].text, "Buy milk");
}

#[test]
fn filter_and_search_narrow_the_session_view_together() {
    let mut store = TaskStore::load(MemoryStorage::new());
    store.add("water plants").unwrap();
    let done = store.add("buy watering can").unwrap();
    store.add("file taxes").unwrap();
    store.toggle(done);

    let mut session = ViewSession::new();
    session.set_search("water");
    assert_eq!(session.visible(store.tasks()).len(), 2);

    session.set_filter(StatusFilter::Active);
    let view = session.visible(store.tasks());
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].text, "water plants");
}
