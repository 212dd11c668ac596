//! Celebration generator: one-shot falling-particle burst on completion.
//!
//! # Responsibility
//! - Spawn a fixed-size batch of randomized particles per trigger.
//! - Animate fall position and opacity decay, retiring expired particles.
//!
//! # Invariants
//! - Every trigger spawns exactly `PARTICLE_COUNT` particles with full
//!   initial opacity and an x position inside the given bounds.
//! - A particle's opacity reaches 0 exactly when its own fall duration
//!   elapses; removal is terminal, particles are never reused.
//!
//! Overlapping triggers stack independent batches with no concurrency cap,
//! matching the source design; `clear` is the explicit teardown hook. The
//! layer is purely decorative and never intercepts input; the caller
//! dismisses it after a fixed delay (`DISMISS_DELAY_MS`).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Particles spawned by one trigger.
pub const PARTICLE_COUNT: usize = 50;

/// Fixed celebration color palette (ARGB).
pub const PARTICLE_COLORS: [u32; 6] = [
    0xFFFFC107, 0xFFE91E63, 0xFF2196F3, 0xFF4CAF50, 0xFF9C27B0, 0xFFFF5722,
];

/// Caller-side dismiss delay, longer than the longest particle lifetime.
pub const DISMISS_DELAY_MS: u64 = 4_500;

const SIZE_MIN: f32 = 5.0;
const SIZE_MAX: f32 = 15.0;
const FALL_DURATION_MIN_MS: u64 = 2_000;
const FALL_DURATION_MAX_MS: u64 = 4_000;
// Spawn band above the visible area so particles fall in from off-screen.
const SPAWN_Y_MIN: f32 = -100.0;
const SPAWN_Y_MAX: f32 = -10.0;

/// Visible canvas size the burst covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// One transient, self-expiring visual element of a celebration batch.
///
/// `batch` is a generation token with no meaning beyond locating the
/// particle during its own animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub batch: u64,
    pub color_argb: u32,
    pub size: f32,
    pub x: f32,
    pub start_y: f32,
    pub end_y: f32,
    /// Current vertical position, refreshed by `CelebrationGenerator::tick`.
    pub y: f32,
    /// Current opacity in `[0, 1]`, refreshed by `tick`.
    pub opacity: f32,
    pub spawned_at_ms: i64,
    pub duration_ms: u64,
}

impl Particle {
    /// Normalized animation progress at `now_ms`, clamped to `[0, 1]`.
    pub fn progress_at(&self, now_ms: i64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.spawned_at_ms);
        if elapsed <= 0 {
            return 0.0;
        }
        ((elapsed as f32) / (self.duration_ms as f32)).min(1.0)
    }

    /// Vertical position at `now_ms`: linear fall from start to just below
    /// the bounds.
    pub fn y_at(&self, now_ms: i64) -> f32 {
        let progress = self.progress_at(now_ms);
        if progress >= 1.0 {
            // Exact landing position, independent of float rounding.
            return self.end_y;
        }
        self.start_y + (self.end_y - self.start_y) * progress
    }

    /// Opacity at `now_ms`: linear decay from 1 to 0 over the fall span.
    pub fn opacity_at(&self, now_ms: i64) -> f32 {
        1.0 - self.progress_at(now_ms)
    }

    /// Whether the particle's bounded lifetime has fully elapsed.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.progress_at(now_ms) >= 1.0
    }
}

/// Owner of the transient particle collection across concurrent batches.
#[derive(Debug)]
pub struct CelebrationGenerator {
    particles: Vec<Particle>,
    rng: StdRng,
    next_batch: u64,
}

impl Default for CelebrationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CelebrationGenerator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
            next_batch: 0,
        }
    }

    /// Synchronously spawns one batch of `PARTICLE_COUNT` particles over the
    /// visible `bounds` and returns the batch token.
    ///
    /// # Contract
    /// - Color uniform over `PARTICLE_COLORS`, size uniform in
    ///   `[5, 15)`, x uniform across `[0, bounds.width)`, start y above the
    ///   visible area, initial opacity 1.
    /// - Triggering again before prior particles finish starts an
    ///   independent overlapping batch; there is no cap on concurrent
    ///   batches.
    pub fn trigger(&mut self, bounds: Bounds, now_ms: i64) -> u64 {
        let batch = self.next_batch;
        self.next_batch += 1;
        self.particles.reserve(PARTICLE_COUNT);

        for _ in 0..PARTICLE_COUNT {
            let color_index = self.rng.gen_range(0..PARTICLE_COLORS.len());
            let size = self.rng.gen_range(SIZE_MIN..SIZE_MAX);
            let x = if bounds.width > 0.0 {
                self.rng.gen_range(0.0..bounds.width)
            } else {
                0.0
            };
            let start_y = self.rng.gen_range(SPAWN_Y_MIN..SPAWN_Y_MAX);
            let duration_ms = self
                .rng
                .gen_range(FALL_DURATION_MIN_MS..FALL_DURATION_MAX_MS);

            self.particles.push(Particle {
                batch,
                color_argb: PARTICLE_COLORS[color_index],
                size,
                x,
                start_y,
                // Land just below the visible edge so the fade-out finishes
                // off-screen.
                end_y: bounds.height + size,
                y: start_y,
                opacity: 1.0,
                spawned_at_ms: now_ms,
                duration_ms,
            });
        }

        batch
    }

    /// Refreshes every particle from its samplers, then retires particles
    /// whose lifetime elapsed. Returns the number retired.
    pub fn tick(&mut self, now_ms: i64) -> usize {
        for particle in &mut self.particles {
            particle.y = particle.y_at(now_ms);
            particle.opacity = particle.opacity_at(now_ms);
        }
        let before = self.particles.len();
        self.particles.retain(|particle| !particle.is_expired(now_ms));
        before - self.particles.len()
    }

    /// Live particles across all concurrent batches.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Whether no batch is currently running.
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drops all live particles. Teardown hook for the owning presentation
    /// context; the source design had no way to abort an in-flight batch.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
