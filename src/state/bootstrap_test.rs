use super::*;

fn profile(family_id: Option<&str>) -> UserProfile {
    UserProfile {
        id: "u1".to_owned(),
        nickname: "Kim".to_owned(),
        family_id: family_id.map(ToOwned::to_owned),
        avatar_url: None,
    }
}

fn member(id: &str) -> FamilyMember {
    FamilyMember {
        id: id.to_owned(),
        nickname: id.to_owned(),
        role: crate::net::types::MemberRole::Parent,
        avatar_url: None,
    }
}

fn navigations(commands: &[BootstrapCommand]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|c| match c {
            BootstrapCommand::Navigate(path) => Some(path.clone()),
            _ => None,
        })
        .collect()
}

fn counts_fetches(commands: &[BootstrapCommand]) -> (usize, usize) {
    let users = commands
        .iter()
        .filter(|c| matches!(c, BootstrapCommand::FetchUser { .. }))
        .count();
    let families = commands
        .iter()
        .filter(|c| matches!(c, BootstrapCommand::FetchFamily { .. }))
        .count();
    (users, families)
}

#[test]
fn missing_token_fails_without_any_fetch() {
    let mut flow = BootstrapFlow::new();
    let commands = flow.start(None);

    assert_eq!(counts_fetches(&commands), (0, 0));
    assert_eq!(navigations(&commands), vec!["/login?error=no-token".to_owned()]);
    assert!(commands.contains(&BootstrapCommand::ClearSession));
    assert_eq!(flow.outcome(), Some(BootstrapOutcome::Failed(FailureReason::NoToken)));
}

#[test]
fn token_starts_timeout_and_user_fetch() {
    let mut flow = BootstrapFlow::new();
    let commands = flow.start(Some("abc123".to_owned()));

    assert_eq!(
        commands,
        vec![
            BootstrapCommand::StartTimeout,
            BootstrapCommand::FetchUser { token: "abc123".to_owned() },
        ]
    );
    assert!(!flow.is_complete());
}

#[test]
fn user_without_family_routes_to_setup_without_family_fetch() {
    let mut flow = BootstrapFlow::new();
    let mut all = flow.start(Some("abc123".to_owned()));
    all.extend(flow.apply(BootstrapEvent::UserResolved(profile(None))));

    let (_, family_fetches) = counts_fetches(&all);
    assert_eq!(family_fetches, 0);
    assert_eq!(navigations(&all), vec![FAMILY_SETUP_ROUTE.to_owned()]);
    assert!(all.contains(&BootstrapCommand::CacheUser(profile(None))));
    assert!(all.contains(&BootstrapCommand::CancelTimeout));
    assert_eq!(flow.outcome(), Some(BootstrapOutcome::NoFamily));
}

#[test]
fn user_with_family_then_members_routes_home_once() {
    let mut flow = BootstrapFlow::new();
    let mut all = flow.start(Some("abc123".to_owned()));
    all.extend(flow.apply(BootstrapEvent::UserResolved(profile(Some("f1")))));
    all.extend(flow.apply(BootstrapEvent::FamilyResolved(vec![member("m1"), member("m2")])));

    assert!(all.contains(&BootstrapCommand::FetchFamily { family_id: "f1".to_owned() }));
    assert!(all.contains(&BootstrapCommand::CacheFamily(vec![member("m1"), member("m2")])));
    assert_eq!(navigations(&all), vec![HOME_ROUTE.to_owned()]);
    assert_eq!(flow.outcome(), Some(BootstrapOutcome::WithFamily));
}

#[test]
fn start_is_idempotent_while_in_flight() {
    let mut flow = BootstrapFlow::new();
    let first = flow.start(Some("abc123".to_owned()));
    let second = flow.start(Some("abc123".to_owned()));

    assert_eq!(counts_fetches(&first), (1, 0));
    assert!(second.is_empty());
}

#[test]
fn start_begins_fresh_after_completion() {
    let mut flow = BootstrapFlow::new();
    flow.start(None);
    assert!(flow.is_complete());

    let commands = flow.start(Some("abc123".to_owned()));
    assert_eq!(counts_fetches(&commands), (1, 0));
    assert!(!flow.is_complete());
}

#[test]
fn timeout_forces_failure_and_later_events_are_ignored() {
    let mut flow = BootstrapFlow::new();
    let mut all = flow.start(Some("abc123".to_owned()));
    all.extend(flow.apply(BootstrapEvent::TimedOut));

    assert_eq!(navigations(&all), vec!["/login?error=timeout".to_owned()]);
    assert_eq!(flow.outcome(), Some(BootstrapOutcome::Failed(FailureReason::Timeout)));

    // The late network completion must not produce a second navigation.
    let late = flow.apply(BootstrapEvent::UserResolved(profile(Some("f1"))));
    assert!(late.is_empty());
}

#[test]
fn stale_timer_cannot_fire_into_a_finished_run() {
    let mut flow = BootstrapFlow::new();
    flow.start(Some("abc123".to_owned()));
    flow.apply(BootstrapEvent::UserResolved(profile(None)));
    assert!(flow.is_complete());

    assert!(flow.apply(BootstrapEvent::TimedOut).is_empty());
}

#[test]
fn timer_is_disarmed_once_user_resolves() {
    let mut flow = BootstrapFlow::new();
    flow.start(Some("abc123".to_owned()));
    let commands = flow.apply(BootstrapEvent::UserResolved(profile(Some("f1"))));

    assert_eq!(commands.first(), Some(&BootstrapCommand::CancelTimeout));

    // The timeout covers the user-validation window only; a stray fire
    // during the family fetch is ignored.
    assert!(flow.apply(BootstrapEvent::TimedOut).is_empty());
    assert!(!flow.is_complete());
}

#[test]
fn rejected_token_clears_session_exactly_once() {
    let mut flow = BootstrapFlow::new();
    let mut all = flow.start(Some("abc123".to_owned()));
    all.extend(flow.apply(BootstrapEvent::UserFailed(ApiError::Unauthorized)));

    let clears = all
        .iter()
        .filter(|c| matches!(c, BootstrapCommand::ClearSession))
        .count();
    assert_eq!(clears, 1);
    assert_eq!(navigations(&all), vec!["/login?error=token-invalid".to_owned()]);
}

#[test]
fn user_fetch_errors_map_to_distinct_reason_codes() {
    let cases = [
        (ApiError::Unauthorized, "token-invalid"),
        (ApiError::NotFound, "user-not-found"),
        (ApiError::Network("offline".to_owned()), "network-error"),
        (ApiError::Status(500), "validation-failed"),
        (ApiError::Decode("bad json".to_owned()), "validation-failed"),
    ];
    for (error, code) in cases {
        let mut flow = BootstrapFlow::new();
        flow.start(Some("abc123".to_owned()));
        let commands = flow.apply(BootstrapEvent::UserFailed(error));
        assert_eq!(navigations(&commands), vec![format!("/login?error={code}")]);
    }
}

#[test]
fn family_fetch_error_routes_to_login_not_setup() {
    let mut flow = BootstrapFlow::new();
    flow.start(Some("abc123".to_owned()));
    flow.apply(BootstrapEvent::UserResolved(profile(Some("f1"))));
    let commands = flow.apply(BootstrapEvent::FamilyFailed(ApiError::Status(502)));

    assert_eq!(navigations(&commands), vec!["/login?error=family-fetch-error".to_owned()]);
    assert_eq!(flow.outcome(), Some(BootstrapOutcome::Failed(FailureReason::FamilyFetch)));
}

#[test]
fn full_run_navigates_exactly_once() {
    let mut flow = BootstrapFlow::new();
    let mut all = flow.start(Some("abc123".to_owned()));
    all.extend(flow.apply(BootstrapEvent::UserResolved(profile(Some("f1")))));
    all.extend(flow.apply(BootstrapEvent::FamilyResolved(vec![member("m1")])));
    all.extend(flow.apply(BootstrapEvent::FamilyResolved(vec![member("m1")])));
    all.extend(flow.apply(BootstrapEvent::TimedOut));

    assert_eq!(navigations(&all).len(), 1);
}
