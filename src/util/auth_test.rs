use super::*;
use crate::net::types::UserProfile;

#[test]
fn redirects_when_settled_without_a_user() {
    let state = AuthState { user: None, loading: false, fetched_at_ms: None };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn holds_while_bootstrap_is_in_flight() {
    let state = AuthState { user: None, loading: true, fetched_at_ms: None };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn holds_when_a_user_is_present() {
    let state = AuthState {
        user: Some(UserProfile {
            id: "u1".to_owned(),
            nickname: "Kim".to_owned(),
            family_id: None,
            avatar_url: None,
        }),
        loading: false,
        fetched_at_ms: Some(0.0),
    };
    assert!(!should_redirect_unauth(&state));
}
