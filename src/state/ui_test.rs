use super::*;

#[test]
fn ui_state_defaults() {
    let s = UiState::default();
    assert!(!s.dark_mode);
    assert!(s.calendar_cursor.is_none());
}
