//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskglow_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskglow_core::{NewTaskRequest, TaskStore};

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from Flutter/FFI runtime setup.
    println!("taskglow_core ping={}", taskglow_core::ping());
    println!("taskglow_core version={}", taskglow_core::core_version());

    let mut store = TaskStore::new();
    let id = store.add(NewTaskRequest::new("smoke task"));
    store.toggle(id);
    println!(
        "taskglow_core smoke tasks={} completed={}",
        store.len(),
        store.completed_count()
    );
}
