//! Core domain logic for TaskGlow.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod store;
pub mod theme;
pub mod visual;

pub use clock::now_epoch_ms;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Category, NewTaskRequest, Priority, Task, TaskId, TaskValidationError};
pub use store::task_store::{TaskStore, ToggleOutcome};
pub use theme::{CategoryStyle, Gradient};
pub use visual::celebration::{
    Bounds, CelebrationGenerator, Particle, DISMISS_DELAY_MS, PARTICLE_COUNT,
};
pub use visual::gradient::{GradientCycler, GradientCyclerError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
