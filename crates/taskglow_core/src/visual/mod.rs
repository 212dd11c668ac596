//! Time-driven presentation subsystems.
//!
//! # Responsibility
//! - Advance ambient background gradients on a host-driven schedule.
//! - Generate one-shot particle celebration bursts on task completion.
//!
//! # Invariants
//! - Both subsystems are independent of task data; they receive time as an
//!   explicit parameter and never read the wall clock themselves.

pub mod celebration;
pub mod gradient;
