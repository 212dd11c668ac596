//! Fixed presentation lookups.
//!
//! # Responsibility
//! - Map closed metadata enums (priority, category) to display constants.
//! - Provide the default ambient background palettes and cycle cadences.
//!
//! # Invariants
//! - Lookups are total closed matches; adding an enum variant fails to
//!   compile until its style is defined here.
//! - Palettes are non-empty and ordered; the cycler wraps over them.

use crate::model::task::{Category, Priority};

/// Two-color gradient definition in ARGB.
///
/// Crosses the FFI boundary as `GradientDto`; core never serializes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start_argb: u32,
    pub end_argb: u32,
}

/// Per-category display record consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Icon identifier resolved by the UI icon set.
    pub icon: &'static str,
    pub gradient: Gradient,
}

/// Ambient cycle cadence for the welcome/landing surface.
pub const WELCOME_CYCLE_INTERVAL_MS: u64 = 6_000;

/// Ambient cycle cadence for the main list surface.
pub const HOME_CYCLE_INTERVAL_MS: u64 = 4_000;

/// Default ambient palette for the welcome/landing surface.
pub fn welcome_palette() -> Vec<Gradient> {
    vec![
        Gradient {
            start_argb: 0xFF6A11CB,
            end_argb: 0xFF2575FC,
        },
        Gradient {
            start_argb: 0xFFFF512F,
            end_argb: 0xFFDD2476,
        },
        Gradient {
            start_argb: 0xFF11998E,
            end_argb: 0xFF38EF7D,
        },
        Gradient {
            start_argb: 0xFFFC466B,
            end_argb: 0xFF3F5EFB,
        },
    ]
}

/// Default ambient palette for the main list surface.
pub fn home_palette() -> Vec<Gradient> {
    vec![
        Gradient {
            start_argb: 0xFF667EEA,
            end_argb: 0xFF764BA2,
        },
        Gradient {
            start_argb: 0xFFF093FB,
            end_argb: 0xFFF5576C,
        },
        Gradient {
            start_argb: 0xFF4FACFE,
            end_argb: 0xFF00F2FE,
        },
        Gradient {
            start_argb: 0xFF43E97B,
            end_argb: 0xFF38F9D7,
        },
        Gradient {
            start_argb: 0xFFFA709A,
            end_argb: 0xFFFEE140,
        },
    ]
}

impl Priority {
    /// Fixed accent color for priority badges.
    pub fn accent_argb(self) -> u32 {
        match self {
            Self::Low => 0xFF4CAF50,
            Self::Medium => 0xFFFF9800,
            Self::High => 0xFFF44336,
        }
    }
}

impl Category {
    /// Fixed icon + gradient pair for category chips and card headers.
    pub fn style(self) -> CategoryStyle {
        match self {
            Self::Work => CategoryStyle {
                icon: "briefcase",
                gradient: Gradient {
                    start_argb: 0xFF667EEA,
                    end_argb: 0xFF764BA2,
                },
            },
            Self::Personal => CategoryStyle {
                icon: "person",
                gradient: Gradient {
                    start_argb: 0xFFF093FB,
                    end_argb: 0xFFF5576C,
                },
            },
            Self::Study => CategoryStyle {
                icon: "school",
                gradient: Gradient {
                    start_argb: 0xFF4FACFE,
                    end_argb: 0xFF00F2FE,
                },
            },
            Self::Health => CategoryStyle {
                icon: "heart",
                gradient: Gradient {
                    start_argb: 0xFF43E97B,
                    end_argb: 0xFF38F9D7,
                },
            },
            Self::Other => CategoryStyle {
                icon: "bookmark",
                gradient: Gradient {
                    start_argb: 0xFFFA709A,
                    end_argb: 0xFFFEE140,
                },
            },
        }
    }
}
