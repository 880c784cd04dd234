//! Browser localStorage helpers.
//!
//! Pages persist small JSON blobs (form drafts, preferences) through these
//! helpers so web-sys glue lives in one place. All reads and writes are
//! best-effort: storage may be absent (SSR) or denied, and callers treat
//! both the same as "no value".

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Handle to `window.localStorage`, when running in a browser.
#[cfg(feature = "hydrate")]
pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load and decode a JSON value stored under `key`.
pub fn read_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Encode and store a JSON value under `key`.
pub fn write_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(value)) {
            let _ = storage.set_item(key, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Delete whatever is stored under `key`.
pub fn remove_key(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
