use super::*;

fn profile() -> UserProfile {
    UserProfile {
        id: "u1".to_owned(),
        nickname: "Kim".to_owned(),
        family_id: Some("f1".to_owned()),
        avatar_url: None,
    }
}

#[test]
fn auth_state_starts_loading() {
    let s = AuthState::default();
    assert!(s.user.is_none());
    assert!(s.loading);
    assert!(s.fetched_at_ms.is_none());
}

#[test]
fn freshness_requires_a_user_and_a_recent_stamp() {
    let mut s = AuthState::default();
    assert!(!s.is_fresh(1000.0));

    s.user = Some(profile());
    s.fetched_at_ms = Some(1000.0);
    assert!(s.is_fresh(1000.0 + crate::state::FRESH_WINDOW_MS - 1.0));
    assert!(!s.is_fresh(1000.0 + crate::state::FRESH_WINDOW_MS));
}
