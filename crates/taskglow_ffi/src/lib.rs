//! Flutter-facing FFI crate for TaskGlow.
//! All exported functions live in `api`.

pub mod api;
