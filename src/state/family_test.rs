use super::*;
use crate::net::types::MemberRole;

fn member(id: &str, nickname: &str) -> FamilyMember {
    FamilyMember {
        id: id.to_owned(),
        nickname: nickname.to_owned(),
        role: MemberRole::Parent,
        avatar_url: None,
    }
}

#[test]
fn family_state_defaults() {
    let s = FamilyState::default();
    assert!(s.family.is_none());
    assert!(s.members.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn nickname_lookup_by_member_id() {
    let s = FamilyState {
        members: vec![member("m1", "Mom"), member("m2", "Yuna")],
        ..FamilyState::default()
    };
    assert_eq!(s.nickname_of("m2"), Some("Yuna"));
    assert_eq!(s.nickname_of("missing"), None);
}

#[test]
fn roster_freshness_uses_the_shared_window() {
    let mut s = FamilyState::default();
    assert!(!s.is_fresh(0.0));
    s.fetched_at_ms = Some(0.0);
    assert!(s.is_fresh(1.0));
    assert!(!s.is_fresh(crate::state::FRESH_WINDOW_MS + 1.0));
}
