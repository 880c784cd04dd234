use super::*;

fn memory() -> Memory {
    Memory {
        id: "mem1".to_owned(),
        family_id: "f1".to_owned(),
        author_id: "u1".to_owned(),
        title: "Beach day".to_owned(),
        body: String::new(),
        event_date: "2026-07-12".to_owned(),
        image_urls: Vec::new(),
        participant_ids: Vec::new(),
        like_count: 2,
        liked_by_me: false,
        comment_count: 0,
        created_at: "2026-07-12T18:03:00Z".to_owned(),
    }
}

fn comment(id: &str) -> Comment {
    Comment {
        id: id.to_owned(),
        memory_id: "mem1".to_owned(),
        author_id: "u2".to_owned(),
        author_nickname: "Mom".to_owned(),
        body: "Lovely!".to_owned(),
        created_at: "2026-07-12T19:00:00Z".to_owned(),
    }
}

#[test]
fn detail_state_defaults() {
    let s = MemoryDetailState::default();
    assert!(s.memory.is_none());
    assert!(s.comments.is_empty());
    assert!(!s.loading);
    assert!(!s.comment_pending);
}

#[test]
fn set_liked_adjusts_count_once_per_direction() {
    let mut s = MemoryDetailState { memory: Some(memory()), ..MemoryDetailState::default() };
    s.set_liked(true);
    s.set_liked(true);
    assert_eq!(s.memory.as_ref().unwrap().like_count, 3);
    assert!(s.memory.as_ref().unwrap().liked_by_me);

    s.set_liked(false);
    assert_eq!(s.memory.as_ref().unwrap().like_count, 2);
}

#[test]
fn set_liked_without_memory_is_a_no_op() {
    let mut s = MemoryDetailState::default();
    s.set_liked(true);
    assert!(s.memory.is_none());
}

#[test]
fn push_comment_keeps_count_in_step() {
    let mut s = MemoryDetailState { memory: Some(memory()), ..MemoryDetailState::default() };
    s.push_comment(comment("c1"));
    s.push_comment(comment("c2"));
    assert_eq!(s.comments.len(), 2);
    assert_eq!(s.memory.as_ref().unwrap().comment_count, 2);
}
