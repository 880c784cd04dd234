//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written once per bootstrap run and read by route guards, the top bar,
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Authentication state tracking the current user and bootstrap progress.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    /// True while the entry bootstrap has not finished.
    pub loading: bool,
    /// When `user` was fetched, for the freshness window.
    pub fetched_at_ms: Option<f64>,
}

impl Default for AuthState {
    fn default() -> Self {
        // The bootstrap flow starts with the app, so the initial render is a
        // loading state rather than a flash of "not signed in".
        Self { user: None, loading: true, fetched_at_ms: None }
    }
}

impl AuthState {
    /// Whether the cached profile is recent enough to reuse without a fetch.
    pub fn is_fresh(&self, now_ms: f64) -> bool {
        self.user.is_some() && super::is_fresh(self.fetched_at_ms, now_ms)
    }
}
