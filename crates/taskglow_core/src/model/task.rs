//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its metadata enums.
//! - Provide lifecycle helpers for completion state changes.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `completed_at_ms` is `Some` if and only if `is_completed` is true.
//! - `created_at_ms` is set once at construction and never mutated.

use crate::clock::now_epoch_ms;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Display urgency of a task.
///
/// Carries no ordering semantics in core; each variant maps to a fixed
/// accent color consumed by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Closed set of task categories.
///
/// Each variant maps to a fixed icon + gradient pair (see `theme`); core
/// logic never branches on category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Work,
    Personal,
    Study,
    Health,
    #[default]
    Other,
}

/// Validation error for task construction and updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task id must not be the nil UUID.
    NilId,
    /// `is_completed` and `completed_at_ms` disagree.
    CompletionStateMismatch {
        is_completed: bool,
        has_completed_at: bool,
    },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::CompletionStateMismatch {
                is_completed,
                has_completed_at,
            } => write!(
                f,
                "completed_at_ms present ({has_completed_at}) must match is_completed ({is_completed})"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Input shape for creating a task.
///
/// Only the title is mandatory; remaining fields carry the creation-form
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    /// Display title. Non-empty by boundary contract; the store does not
    /// re-check it.
    pub title: String,
    /// Free-form detail text, may be empty.
    pub description: String,
    pub priority: Priority,
    pub category: Category,
}

impl NewTaskRequest {
    /// Creates a request with form defaults: empty description, medium
    /// priority, `other` category.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            category: Category::default(),
        }
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTask")]
pub struct Task {
    /// Stable global ID used for toggling, deletion and edit round-trips.
    pub id: TaskId,
    /// Non-empty display title (enforced at the presentation boundary).
    pub title: String,
    /// Free-form detail text, may be empty.
    pub description: String,
    pub is_completed: bool,
    pub priority: Priority,
    pub category: Category,
    /// Unix epoch milliseconds, set once at construction.
    pub created_at_ms: i64,
    /// Unix epoch milliseconds. `Some` exactly when `is_completed`.
    pub completed_at_ms: Option<i64>,
}

impl Task {
    /// Creates a new pending task with a generated stable ID.
    ///
    /// # Invariants
    /// - `is_completed` starts as `false` with no completion timestamp.
    /// - `created_at_ms` is the wall clock at construction.
    pub fn new(request: NewTaskRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            is_completed: false,
            priority: request.priority,
            category: request.category,
            created_at_ms: now_epoch_ms(),
            completed_at_ms: None,
        }
    }

    /// Creates a pending task with caller-provided identity and creation time.
    ///
    /// Used by edit/import paths where identity already exists externally.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::NilId` for the nil UUID.
    pub fn with_id(
        id: TaskId,
        request: NewTaskRequest,
        created_at_ms: i64,
    ) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        Ok(Self {
            id,
            title: request.title,
            description: request.description,
            is_completed: false,
            priority: request.priority,
            category: request.category,
            created_at_ms,
            completed_at_ms: None,
        })
    }

    /// Checks the completion/timestamp invariant and id validity.
    ///
    /// # Errors
    /// - `NilId` when the id is the nil UUID.
    /// - `CompletionStateMismatch` when `is_completed` and `completed_at_ms`
    ///   disagree.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.is_completed != self.completed_at_ms.is_some() {
            return Err(TaskValidationError::CompletionStateMismatch {
                is_completed: self.is_completed,
                has_completed_at: self.completed_at_ms.is_some(),
            });
        }
        Ok(())
    }

    /// Marks the task completed at `now_ms`, setting both fields together.
    pub fn mark_completed(&mut self, now_ms: i64) {
        self.is_completed = true;
        self.completed_at_ms = Some(now_ms);
    }

    /// Returns the task to pending, clearing both fields together.
    pub fn mark_pending(&mut self) {
        self.is_completed = false;
        self.completed_at_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        !self.is_completed
    }
}

/// Unvalidated wire shape; `Task` deserialization re-validates through it so
/// inconsistent completion state cannot enter core from outside.
#[derive(Deserialize)]
struct RawTask {
    id: TaskId,
    title: String,
    description: String,
    is_completed: bool,
    priority: Priority,
    category: Category,
    created_at_ms: i64,
    completed_at_ms: Option<i64>,
}

impl TryFrom<RawTask> for Task {
    type Error = TaskValidationError;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        let task = Task {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            is_completed: raw.is_completed,
            priority: raw.priority,
            category: raw.category,
            created_at_ms: raw.created_at_ms,
            completed_at_ms: raw.completed_at_ms,
        };
        task.validate()?;
        Ok(task)
    }
}
