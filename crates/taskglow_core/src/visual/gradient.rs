//! Gradient cycler: timer-driven index rotation over an ambient palette.
//!
//! # Responsibility
//! - Advance a palette index at a fixed cadence, wrapping modulo length.
//! - Support a manual advance outside the periodic schedule.
//!
//! # Invariants
//! - The palette is non-empty and the interval is non-zero for the cycler's
//!   whole lifetime.
//! - Periodic steps are committed at most once per elapsed interval
//!   boundary; a clock that moves backward commits nothing.
//!
//! The host UI timer drives `poll`; there is no pause/resume. The source
//! design never invalidated its periodic timer, so a cycler keeps stepping
//! for the lifetime of the presentation context that activated it; dropping
//! the cycler is the teardown hook.

use crate::theme::Gradient;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Activation error for the gradient cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientCyclerError {
    /// The palette must contain at least one gradient.
    EmptyPalette,
    /// The cycle interval must be non-zero.
    ZeroInterval,
}

impl Display for GradientCyclerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "gradient palette must not be empty"),
            Self::ZeroInterval => write!(f, "cycle interval must be non-zero"),
        }
    }
}

impl Error for GradientCyclerError {}

/// Periodic palette index rotator for one presentation context.
#[derive(Debug, Clone)]
pub struct GradientCycler {
    palette: Vec<Gradient>,
    interval_ms: u64,
    index: usize,
    activated_at_ms: i64,
    committed_steps: u64,
}

impl GradientCycler {
    /// Activates a cycler over `palette` stepping every `interval_ms`.
    ///
    /// The index starts at 0; the first periodic step commits once
    /// `interval_ms` has elapsed past `now_ms`.
    ///
    /// # Errors
    /// - `EmptyPalette` when `palette` has no entries.
    /// - `ZeroInterval` when `interval_ms` is 0.
    pub fn activate(
        palette: Vec<Gradient>,
        interval_ms: u64,
        now_ms: i64,
    ) -> Result<Self, GradientCyclerError> {
        if palette.is_empty() {
            return Err(GradientCyclerError::EmptyPalette);
        }
        if interval_ms == 0 {
            return Err(GradientCyclerError::ZeroInterval);
        }
        Ok(Self {
            palette,
            interval_ms,
            index: 0,
            activated_at_ms: now_ms,
            committed_steps: 0,
        })
    }

    /// Commits every interval boundary elapsed since activation that has not
    /// been committed yet, then returns the current index.
    ///
    /// Catch-up is deliberate: a host timer that fires late still lands the
    /// cycler on the same index an on-time timer would have.
    pub fn poll(&mut self, now_ms: i64) -> usize {
        let elapsed_ms = now_ms.saturating_sub(self.activated_at_ms).max(0) as u64;
        let due_steps = elapsed_ms / self.interval_ms;
        if due_steps > self.committed_steps {
            // Fold all pending steps in one modular jump so the cost stays
            // constant even across a huge clock jump.
            let pending = due_steps - self.committed_steps;
            let wrapped = (pending % self.palette.len() as u64) as usize;
            self.index = (self.index + wrapped) % self.palette.len();
            self.committed_steps = due_steps;
        }
        self.index
    }

    /// Manual advance triggered by explicit user action.
    ///
    /// Performs the same wrapping step as a periodic firing but does not
    /// disturb the periodic bookkeeping.
    pub fn advance(&mut self) -> usize {
        self.step();
        self.index
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_gradient(&self) -> Gradient {
        self.palette[self.index]
    }

    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    fn step(&mut self) {
        self.index = (self.index + 1) % self.palette.len();
    }
}
