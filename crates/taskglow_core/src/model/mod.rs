//! Domain model for task records.
//!
//! # Responsibility
//! - Define the canonical task shape shared by store, FFI and UI projections.
//! - Enforce the completion/timestamp invariant at construction boundaries.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - `completed_at_ms` is present exactly when `is_completed` is true.

pub mod task;
