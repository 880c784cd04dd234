use super::*;

#[test]
fn user_profile_parses_with_null_family() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"id":"u1","nickname":"Kim","family_id":null}"#).unwrap();
    assert_eq!(profile.id, "u1");
    assert_eq!(profile.nickname, "Kim");
    assert!(profile.family_id.is_none());
    assert!(profile.avatar_url.is_none());
}

#[test]
fn member_role_defaults_to_parent_when_absent() {
    let member: FamilyMember = serde_json::from_str(r#"{"id":"m1","nickname":"Mom"}"#).unwrap();
    assert_eq!(member.role, MemberRole::Parent);
}

#[test]
fn member_role_parses_lowercase_child() {
    let member: FamilyMember =
        serde_json::from_str(r#"{"id":"m2","nickname":"Yuna","role":"child"}"#).unwrap();
    assert_eq!(member.role, MemberRole::Child);
}

#[test]
fn memory_fills_optional_collections_and_counts() {
    let memory: Memory = serde_json::from_str(
        r#"{
            "id": "mem1",
            "family_id": "f1",
            "author_id": "u1",
            "title": "Beach day",
            "body": "We built a **huge** sandcastle.",
            "event_date": "2026-07-12",
            "created_at": "2026-07-12T18:03:00Z"
        }"#,
    )
    .unwrap();
    assert!(memory.image_urls.is_empty());
    assert!(memory.participant_ids.is_empty());
    assert_eq!(memory.like_count, 0);
    assert!(!memory.liked_by_me);
    assert_eq!(memory.comment_count, 0);
}

#[test]
fn media_job_status_settlement() {
    assert!(!JobStatus::Pending.is_settled());
    assert!(!JobStatus::Processing.is_settled());
    assert!(JobStatus::Done.is_settled());
    assert!(JobStatus::Failed.is_settled());
}

#[test]
fn media_job_parses_done_payload() {
    let job: MediaJob = serde_json::from_str(
        r#"{"id":"j1","status":"done","result_url":"https://cdn.example/v/j1.mp4"}"#,
    )
    .unwrap();
    assert_eq!(job.status, JobStatus::Done);
    assert_eq!(job.result_url.as_deref(), Some("https://cdn.example/v/j1.mp4"));
    assert!(job.error.is_none());
}
