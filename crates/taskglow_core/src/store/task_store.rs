//! Task store: the authoritative task collection and its sole mutator.
//!
//! # Responsibility
//! - Provide add/toggle/delete/clear/update operations over the sequence.
//! - Report completion transitions so callers can react (celebration).
//!
//! # Invariants
//! - Order is display order: newest task first, new tasks are prepended.
//! - `toggle` is the single authorized completion state change; it sets or
//!   clears `completed_at_ms` atomically with `is_completed`.
//! - Unknown ids are silent no-ops for `toggle`, `delete` and `update`.

use crate::clock::now_epoch_ms;
use crate::model::task::{NewTaskRequest, Task, TaskId, TaskValidationError};
use log::debug;

/// Direction of a successful toggle.
///
/// `Completed` is the trigger condition the presentation layer uses to fire
/// the celebration burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Pending -> completed transition.
    Completed,
    /// Completed -> pending transition.
    Reopened,
}

/// Ordered in-memory task collection, newest first.
///
/// All mutation runs on the host UI thread; the store itself holds no
/// synchronization.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task from the request and prepends it to the sequence.
    ///
    /// # Contract
    /// - `request.title` is trimmed and non-empty; the presentation boundary
    ///   enforces this before calling, the store does not re-check.
    /// - The new task is pending with no completion timestamp.
    /// - Returns the freshly generated id.
    pub fn add(&mut self, request: NewTaskRequest) -> TaskId {
        let task = Task::new(request);
        let id = task.id;
        self.tasks.insert(0, task);
        debug!("event=task_added module=store status=ok id={id}");
        id
    }

    /// Flips completion state for `id`.
    ///
    /// Pending tasks become completed with `completed_at_ms = now`;
    /// completed tasks become pending with the timestamp cleared. Both
    /// fields always change together.
    ///
    /// Returns `None` for an unknown id (silent no-op).
    pub fn toggle(&mut self, id: TaskId) -> Option<ToggleOutcome> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        let outcome = if task.is_pending() {
            task.mark_completed(now_epoch_ms());
            ToggleOutcome::Completed
        } else {
            task.mark_pending();
            ToggleOutcome::Reopened
        };
        debug!("event=task_toggled module=store status=ok id={id} outcome={outcome:?}");
        Some(outcome)
    }

    /// Removes the task with `id`. Returns whether a task was removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        before != self.tasks.len()
    }

    /// Removes every completed task, preserving relative order of the rest.
    ///
    /// Returns the number of tasks removed.
    pub fn delete_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.is_pending());
        let removed = before - self.tasks.len();
        if removed > 0 {
            debug!("event=completed_cleared module=store status=ok removed={removed}");
        }
        removed
    }

    /// Wholesale replacement of the stored task sharing `task.id`.
    ///
    /// Unknown id is a silent no-op. Partial edits must read-modify-write
    /// the full record; the store rejects a replacement whose completion
    /// state and timestamp disagree so inconsistent state can never enter
    /// the sequence.
    ///
    /// # Errors
    /// - `TaskValidationError` when the replacement violates the
    ///   completion/timestamp invariant or carries a nil id.
    pub fn update(&mut self, task: Task) -> Result<(), TaskValidationError> {
        task.validate()?;
        if let Some(slot) = self.tasks.iter_mut().find(|stored| stored.id == task.id) {
            *slot = task;
        }
        Ok(())
    }

    /// Ordered snapshot of the sequence, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Count of pending tasks, computed from the snapshot on demand.
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_pending()).count()
    }

    /// Count of completed tasks, computed from the snapshot on demand.
    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.pending_count()
    }
}
