//! Wall-clock access for freshness stamps.

/// Milliseconds since the Unix epoch in the browser; `0.0` during SSR so
/// server-rendered state always reads as stale.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
