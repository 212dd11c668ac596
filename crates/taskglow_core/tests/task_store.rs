use std::collections::HashSet;
use taskglow_core::{NewTaskRequest, Priority, Task, TaskStore, TaskValidationError, ToggleOutcome};
use uuid::Uuid;

fn store_with_titles(titles: &[&str]) -> TaskStore {
    let mut store = TaskStore::new();
    for title in titles {
        store.add(NewTaskRequest::new(*title));
    }
    store
}

fn assert_store_consistent(store: &TaskStore) {
    let mut seen = HashSet::new();
    for task in store.tasks() {
        task.validate().unwrap();
        assert!(seen.insert(task.id), "duplicate id in store: {}", task.id);
    }
}

#[test]
fn add_prepends_newest_first() {
    let store = store_with_titles(&["first", "second", "third"]);

    assert_eq!(store.len(), 3);
    assert_eq!(store.tasks()[0].title, "third");
    assert_eq!(store.tasks()[1].title, "second");
    assert_eq!(store.tasks()[2].title, "first");
    assert_store_consistent(&store);
}

#[test]
fn add_returns_id_of_pending_task() {
    let mut store = TaskStore::new();
    let id = store.add(NewTaskRequest::new("Buy milk"));

    let task = store.get(id).unwrap();
    assert_eq!(task.title, "Buy milk");
    assert!(!task.is_completed);
    assert_eq!(task.completed_at_ms, None);
    assert_eq!(store.tasks()[0].id, id);
}

#[test]
fn toggle_round_trip_restores_pending_state() {
    let mut store = TaskStore::new();
    let id = store.add(NewTaskRequest::new("flip me"));

    assert_eq!(store.toggle(id), Some(ToggleOutcome::Completed));
    let completed = store.get(id).unwrap();
    assert!(completed.is_completed);
    assert!(completed.completed_at_ms.is_some());
    assert_store_consistent(&store);

    assert_eq!(store.toggle(id), Some(ToggleOutcome::Reopened));
    let pending = store.get(id).unwrap();
    assert!(!pending.is_completed);
    assert_eq!(pending.completed_at_ms, None);
    assert_store_consistent(&store);
}

#[test]
fn toggle_unknown_id_is_a_silent_noop() {
    let mut store = store_with_titles(&["only"]);

    assert_eq!(store.toggle(Uuid::new_v4()), None);
    assert_eq!(store.len(), 1);
    assert!(!store.tasks()[0].is_completed);
}

#[test]
fn delete_removes_only_the_matching_task() {
    let mut store = TaskStore::new();
    let keep = store.add(NewTaskRequest::new("keep"));
    let drop = store.add(NewTaskRequest::new("drop"));

    assert!(store.delete(drop));
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].id, keep);
}

#[test]
fn delete_unknown_id_leaves_store_unchanged() {
    let mut store = store_with_titles(&["a", "b"]);
    let snapshot: Vec<Task> = store.tasks().to_vec();

    assert!(!store.delete(Uuid::new_v4()));
    assert_eq!(store.tasks(), snapshot.as_slice());
}

#[test]
fn delete_completed_preserves_relative_order_of_remainder() {
    let mut store = store_with_titles(&["a", "b", "c"]);
    // Store order is newest first: c, b, a. Complete the middle one.
    let middle = store.tasks()[1].id;
    store.toggle(middle);

    assert_eq!(store.delete_completed(), 1);
    assert_eq!(store.len(), 2);
    assert_eq!(store.tasks()[0].title, "c");
    assert_eq!(store.tasks()[1].title, "a");
    assert!(store.tasks().iter().all(|task| !task.is_completed));
}

#[test]
fn delete_completed_on_all_pending_removes_nothing() {
    let mut store = store_with_titles(&["a", "b"]);
    assert_eq!(store.delete_completed(), 0);
    assert_eq!(store.len(), 2);
}

#[test]
fn update_replaces_record_wholesale() {
    let mut store = TaskStore::new();
    let id = store.add(NewTaskRequest::new("draft"));

    let mut edited = store.get(id).unwrap().clone();
    edited.title = "polished".to_string();
    edited.description = "now with details".to_string();
    edited.priority = Priority::High;
    store.update(edited).unwrap();

    let stored = store.get(id).unwrap();
    assert_eq!(stored.title, "polished");
    assert_eq!(stored.description, "now with details");
    assert_eq!(stored.priority, Priority::High);
    assert_store_consistent(&store);
}

#[test]
fn update_unknown_id_is_a_silent_noop() {
    let mut store = store_with_titles(&["only"]);
    let stray = Task::with_id(Uuid::new_v4(), NewTaskRequest::new("stray"), 1).unwrap();

    store.update(stray).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].title, "only");
}

#[test]
fn update_rejects_inconsistent_completion_state() {
    let mut store = TaskStore::new();
    let id = store.add(NewTaskRequest::new("guard me"));

    let mut corrupted = store.get(id).unwrap().clone();
    corrupted.is_completed = true;
    // completed_at_ms left as None: the invariant must hold both ways.
    let err = store.update(corrupted).unwrap_err();
    assert!(matches!(
        err,
        TaskValidationError::CompletionStateMismatch { .. }
    ));

    // The stored record is untouched.
    assert!(!store.get(id).unwrap().is_completed);
    assert_store_consistent(&store);
}

#[test]
fn counts_are_derived_from_the_snapshot() {
    let mut store = store_with_titles(&["a", "b", "c"]);
    assert_eq!(store.pending_count(), 3);
    assert_eq!(store.completed_count(), 0);

    let id = store.tasks()[0].id;
    store.toggle(id);
    assert_eq!(store.pending_count(), 2);
    assert_eq!(store.completed_count(), 1);

    store.delete_completed();
    assert_eq!(store.pending_count(), 2);
    assert_eq!(store.completed_count(), 0);
}

#[test]
fn ids_stay_unique_across_many_operations() {
    let mut store = TaskStore::new();
    let mut ids = Vec::new();
    for i in 0..20 {
        ids.push(store.add(NewTaskRequest::new(format!("task {i}"))));
    }
    for id in ids.iter().step_by(3) {
        store.toggle(*id);
    }
    store.delete(ids[5]);
    store.delete_completed();

    assert_store_consistent(&store);
    assert!(store.is_empty() || store.tasks().iter().all(|task| !task.is_completed));
}
