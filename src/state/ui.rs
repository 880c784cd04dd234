//! Local UI chrome state (dark mode, calendar cursor).
//!
//! Keeps transient presentation concerns out of the domain states so the
//! calendar and bookshelf can coordinate without touching memory data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme and cross-page view coordination.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Month the calendar should open on, set when a bookshelf book is
    /// opened. `None` means the current month.
    pub calendar_cursor: Option<(i32, u32)>,
}
