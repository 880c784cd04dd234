//! Persistent session-credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The opaque session token lives in localStorage: written at login, read by
//! the bootstrap flow at app entry, and cleared on logout or when bootstrap
//! invalidates the session. Token presence is the flow's first input.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "hearthbook_session";

/// Read the stored session token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let token = super::storage::local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
        if token.is_empty() { None } else { Some(token) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token after a successful login.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = super::storage::local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Drop the session token (logout side effect).
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = super::storage::local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
