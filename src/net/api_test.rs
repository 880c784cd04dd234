use super::*;

#[test]
fn member_roster_endpoint_formats_expected_path() {
    assert_eq!(family_members_endpoint("f1"), "/api/families/f1/members");
}

#[test]
fn memory_endpoints_format_expected_paths() {
    assert_eq!(memory_endpoint("mem1"), "/api/memories/mem1");
    assert_eq!(memory_like_endpoint("mem1"), "/api/memories/mem1/like");
    assert_eq!(memory_comments_endpoint("mem1"), "/api/memories/mem1/comments");
}

#[test]
fn media_job_endpoint_formats_expected_path() {
    assert_eq!(media_job_endpoint("j1"), "/api/media/jobs/j1");
}

#[test]
fn memories_query_scopes_to_a_month_when_given() {
    assert_eq!(memories_query(None), "/api/memories");
    assert_eq!(memories_query(Some((2026, 8))), "/api/memories?year=2026&month=8");
}
