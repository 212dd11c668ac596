//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Enforce boundary contracts (non-empty title) before core is called.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All state mutation is serialized through one process-global handle;
//!   the host UI event loop is the only caller.
//! - Store-generated timestamps are the source of truth for completion
//!   state crossing this boundary.

use log::warn;
use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock};
use taskglow_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, now_epoch_ms,
    ping as ping_inner, Bounds, Category, CelebrationGenerator, Gradient, GradientCycler,
    NewTaskRequest, Priority, Task, TaskId, TaskStore, ToggleOutcome,
};

static APP_STATE: OnceLock<Mutex<AppState>> = OnceLock::new();

/// Process-global core state owned by this boundary.
///
/// Gradient cyclers are keyed by caller-chosen context label so each
/// presentation surface (welcome, home) runs its own cadence.
struct AppState {
    store: TaskStore,
    cyclers: BTreeMap<String, GradientCycler>,
    celebration: CelebrationGenerator,
}

impl AppState {
    fn new() -> Self {
        Self {
            store: TaskStore::new(),
            cyclers: BTreeMap::new(),
            celebration: CelebrationGenerator::new(),
        }
    }
}

fn with_state<T>(f: impl FnOnce(&mut AppState) -> T) -> T {
    let mutex = APP_STATE.get_or_init(|| Mutex::new(AppState::new()));
    // Why: a poisoned mutex only means a previous caller panicked; the state
    // itself is still usable and the FFI contract forbids propagating panics.
    let mut guard = match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task record crossing the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDto {
    /// Stable task ID in string form.
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    /// Label form: `low|medium|high`.
    pub priority: String,
    /// Label form: `work|personal|study|health|other`.
    pub category: String,
    pub created_at_ms: i64,
    pub completed_at_ms: Option<i64>,
}

/// Ordered snapshot plus on-demand derived counts.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskListResponse {
    /// Display order: newest first.
    pub items: Vec<TaskDto>,
    pub pending_count: u32,
    pub completed_count: u32,
}

/// Generic action response envelope for task command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Optional affected task ID.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: String) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Toggle response carrying the completion-transition event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskToggleResponse {
    pub ok: bool,
    /// True exactly when the task just transitioned pending -> completed;
    /// the UI uses this to trigger the celebration burst.
    pub just_completed: bool,
    pub message: String,
}

/// Response for clearing completed tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearCompletedResponse {
    pub removed: u32,
    pub message: String,
}

/// Creates a task and prepends it to the list.
///
/// This boundary owns the non-empty-title contract: `title` is trimmed and
/// an empty result is rejected before the store is called.
///
/// Unknown priority/category labels fall back to form defaults.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
/// - Returns operation result and created task ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(
    title: String,
    description: String,
    priority: String,
    category: String,
) -> TaskActionResponse {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        warn!("event=task_add_rejected module=ffi status=error reason=empty_title");
        return TaskActionResponse::failure("task_add failed: title must not be empty");
    }

    let request = NewTaskRequest {
        title: trimmed.to_string(),
        description: description.trim().to_string(),
        priority: parse_priority(&priority),
        category: parse_category(&category),
    };
    let id = with_state(|state| state.store.add(request));
    TaskActionResponse::success("Task created.", id.to_string())
}

/// Flips completion state for one task.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Unknown id is a no-op per store contract, reported with `ok = true`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(id: String) -> TaskToggleResponse {
    let task_id = match parse_task_id(&id) {
        Ok(task_id) => task_id,
        Err(message) => {
            return TaskToggleResponse {
                ok: false,
                just_completed: false,
                message: format!("task_toggle failed: {message}"),
            };
        }
    };

    let outcome = with_state(|state| state.store.toggle(task_id));
    match outcome {
        Some(ToggleOutcome::Completed) => TaskToggleResponse {
            ok: true,
            just_completed: true,
            message: "Task completed.".to_string(),
        },
        Some(ToggleOutcome::Reopened) => TaskToggleResponse {
            ok: true,
            just_completed: false,
            message: "Task reopened.".to_string(),
        },
        None => TaskToggleResponse {
            ok: true,
            just_completed: false,
            message: "No matching task.".to_string(),
        },
    }
}

/// Deletes one task by id.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Unknown id is a no-op per store contract, reported with `ok = true`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: String) -> TaskActionResponse {
    let task_id = match parse_task_id(&id) {
        Ok(task_id) => task_id,
        Err(message) => return TaskActionResponse::failure(format!("task_delete failed: {message}")),
    };

    let removed = with_state(|state| state.store.delete(task_id));
    let message = if removed {
        "Task deleted."
    } else {
        "No matching task."
    };
    TaskActionResponse::success(message, task_id.to_string())
}

/// Removes every completed task, preserving the order of the rest.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_clear_completed() -> ClearCompletedResponse {
    let removed = with_state(|state| state.store.delete_completed());
    ClearCompletedResponse {
        removed: removed as u32,
        message: format!("Removed {removed} completed task(s)."),
    }
}

/// Wholesale replacement of one task from the detail-edit flow.
///
/// Completion state is normalized against the store before the write: a
/// record arriving as completed keeps the store's existing completion
/// timestamp (or receives a fresh one for a new transition) rather than
/// trusting a UI-local copy. This keeps a single source of truth for
/// `completed_at_ms`. `created_at_ms` is likewise immutable and kept from
/// the stored record.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Unknown id is a no-op per store contract, reported with `ok = true`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_update(task: TaskDto) -> TaskActionResponse {
    let task_id = match parse_task_id(&task.id) {
        Ok(task_id) => task_id,
        Err(message) => return TaskActionResponse::failure(format!("task_update failed: {message}")),
    };
    let trimmed_title = task.title.trim();
    if trimmed_title.is_empty() {
        return TaskActionResponse::failure("task_update failed: title must not be empty");
    }

    let result = with_state(|state| {
        let stored = state.store.get(task_id);
        let completed_at_ms = if task.is_completed {
            match stored.and_then(|stored| stored.completed_at_ms) {
                Some(stored_at) => Some(stored_at),
                None => Some(now_epoch_ms()),
            }
        } else {
            None
        };
        // created_at is immutable; keep the stored value when the task exists.
        let created_at_ms = stored
            .map(|stored| stored.created_at_ms)
            .unwrap_or(task.created_at_ms);

        let replacement = Task {
            id: task_id,
            title: trimmed_title.to_string(),
            description: task.description.trim().to_string(),
            is_completed: task.is_completed,
            priority: parse_priority(&task.priority),
            category: parse_category(&task.category),
            created_at_ms,
            completed_at_ms,
        };
        state.store.update(replacement)
    });

    match result {
        Ok(()) => TaskActionResponse::success("Task updated.", task_id.to_string()),
        Err(err) => TaskActionResponse::failure(format!("task_update failed: {err}")),
    }
}

/// Ordered snapshot of all tasks, newest first, with derived counts.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Counts are computed from the snapshot, never cached.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list() -> TaskListResponse {
    with_state(|state| TaskListResponse {
        items: state.store.tasks().iter().map(to_task_dto).collect(),
        pending_count: state.store.pending_count() as u32,
        completed_count: state.store.completed_count() as u32,
    })
}

/// Two-color gradient crossing the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientDto {
    pub start_argb: u32,
    pub end_argb: u32,
}

/// Gradient cycler response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientFrame {
    pub ok: bool,
    pub index: u32,
    pub start_argb: u32,
    pub end_argb: u32,
    pub message: String,
}

impl GradientFrame {
    fn from_cycler(cycler: &GradientCycler) -> Self {
        let gradient = cycler.current_gradient();
        Self {
            ok: true,
            index: cycler.current_index() as u32,
            start_argb: gradient.start_argb,
            end_argb: gradient.end_argb,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            index: 0,
            start_argb: 0,
            end_argb: 0,
            message: message.into(),
        }
    }
}

/// Activates (or restarts) the gradient cycler for one presentation context.
///
/// The caller supplies the palette and cadence at activation; re-entering a
/// surface restarts its cycle from index 0.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Empty palette / zero interval return an envelope failure.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn gradient_activate(
    context: String,
    palette: Vec<GradientDto>,
    interval_ms: u32,
) -> GradientFrame {
    let palette: Vec<Gradient> = palette
        .into_iter()
        .map(|stop| Gradient {
            start_argb: stop.start_argb,
            end_argb: stop.end_argb,
        })
        .collect();

    match GradientCycler::activate(palette, u64::from(interval_ms), now_epoch_ms()) {
        Ok(cycler) => with_state(|state| {
            let frame = GradientFrame::from_cycler(&cycler);
            state.cyclers.insert(context, cycler);
            frame
        }),
        Err(err) => GradientFrame::failure(format!("gradient_activate failed: {err}")),
    }
}

/// Commits any due periodic steps for one context and returns its gradient.
///
/// Driven by the host UI timer; late firings catch up to the on-time index.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Unknown context returns an envelope failure.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn gradient_poll(context: String) -> GradientFrame {
    with_state(|state| match state.cyclers.get_mut(&context) {
        Some(cycler) => {
            cycler.poll(now_epoch_ms());
            GradientFrame::from_cycler(cycler)
        }
        None => GradientFrame::failure(format!("gradient_poll failed: unknown context `{context}`")),
    })
}

/// Manual advance for one context, outside the periodic schedule.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Unknown context returns an envelope failure.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn gradient_advance(context: String) -> GradientFrame {
    with_state(|state| match state.cyclers.get_mut(&context) {
        Some(cycler) => {
            cycler.advance();
            GradientFrame::from_cycler(cycler)
        }
        None => {
            GradientFrame::failure(format!("gradient_advance failed: unknown context `{context}`"))
        }
    })
}

/// One particle snapshot for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleDto {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub color_argb: u32,
}

/// Trigger response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CelebrationResponse {
    pub ok: bool,
    /// Particles spawned by this trigger.
    pub spawned: u32,
    pub message: String,
}

/// One animation frame of the celebration layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationFrame {
    pub particles: Vec<ParticleDto>,
    /// False once every batch has fully expired.
    pub active: bool,
}

/// Spawns one celebration batch over the visible canvas.
///
/// Overlapping triggers stack; the layer is decorative only and the UI
/// dismisses it after `DISMISS_DELAY_MS` regardless of particle state.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn celebration_trigger(width: f64, height: f64) -> CelebrationResponse {
    let bounds = Bounds {
        width: width as f32,
        height: height as f32,
    };
    let spawned = with_state(|state| {
        state.celebration.trigger(bounds, now_epoch_ms());
        state.celebration.particles().len()
    });
    CelebrationResponse {
        ok: true,
        spawned: taskglow_core::PARTICLE_COUNT as u32,
        message: format!("Spawned {} particle(s), {spawned} live.", taskglow_core::PARTICLE_COUNT),
    }
}

/// Advances the celebration animation to now and returns live particles.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Expired particles are retired before the snapshot is taken.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn celebration_frame() -> CelebrationFrame {
    with_state(|state| {
        state.celebration.tick(now_epoch_ms());
        CelebrationFrame {
            particles: state
                .celebration
                .particles()
                .iter()
                .map(|particle| ParticleDto {
                    x: f64::from(particle.x),
                    y: f64::from(particle.y),
                    size: f64::from(particle.size),
                    opacity: f64::from(particle.opacity),
                    color_argb: particle.color_argb,
                })
                .collect(),
            active: !state.celebration.is_idle(),
        }
    })
}

/// Drops all live particles. Teardown hook for the owning surface.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn celebration_clear() {
    with_state(|state| state.celebration.clear());
}

fn parse_task_id(value: &str) -> Result<TaskId, String> {
    uuid::Uuid::parse_str(value.trim()).map_err(|_| {
        warn!("event=task_id_rejected module=ffi status=error");
        format!("invalid task id `{value}`")
    })
}

fn to_task_dto(task: &Task) -> TaskDto {
    TaskDto {
        id: task.id.to_string(),
        title: task.title.clone(),
        description: task.description.clone(),
        is_completed: task.is_completed,
        priority: priority_label(task.priority).to_string(),
        category: category_label(task.category).to_string(),
        created_at_ms: task.created_at_ms,
        completed_at_ms: task.completed_at_ms,
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

fn parse_priority(value: &str) -> Priority {
    match value.trim().to_ascii_lowercase().as_str() {
        "low" => Priority::Low,
        "high" => Priority::High,
        // Tolerant fallback keeps the boundary total; "medium" and any
        // unrecognized label land on the form default.
        _ => Priority::Medium,
    }
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Work => "work",
        Category::Personal => "personal",
        Category::Study => "study",
        Category::Health => "health",
        Category::Other => "other",
    }
}

fn parse_category(value: &str) -> Category {
    match value.trim().to_ascii_lowercase().as_str() {
        "work" => Category::Work,
        "personal" => Category::Personal,
        "study" => Category::Study,
        "health" => Category::Health,
        _ => Category::Other,
    }
}
