//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `family`, `memories`, etc.) so pages
//! and components depend on small focused models. Each struct is provided
//! as an `RwSignal` context from the app root; fetched domains carry a
//! timestamp so readers can honor the freshness window instead of
//! refetching on every mount.

pub mod auth;
pub mod bootstrap;
pub mod family;
pub mod memories;
pub mod memory_detail;
pub mod ui;

/// How long a fetched profile or member list stays fresh, in milliseconds.
pub const FRESH_WINDOW_MS: f64 = 10.0 * 60.0 * 1000.0;

/// Whether a fetch stamped at `fetched_at_ms` is still inside the window.
pub(crate) fn is_fresh(fetched_at_ms: Option<f64>, now_ms: f64) -> bool {
    fetched_at_ms.is_some_and(|at| now_ms - at < FRESH_WINDOW_MS)
}
