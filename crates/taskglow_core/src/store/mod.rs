//! In-memory task collection ownership.
//!
//! # Responsibility
//! - Own the ordered task sequence and expose its only mutation paths.
//! - Keep derived counts as on-demand queries, never cached state.
//!
//! # Invariants
//! - No id appears twice in the sequence.
//! - Every held task satisfies `Task::validate()`.

pub mod task_store;
