use super::*;

fn memory(id: &str, event_date: &str) -> Memory {
    Memory {
        id: id.to_owned(),
        family_id: "f1".to_owned(),
        author_id: "u1".to_owned(),
        title: id.to_owned(),
        body: String::new(),
        event_date: event_date.to_owned(),
        image_urls: Vec::new(),
        participant_ids: Vec::new(),
        like_count: 0,
        liked_by_me: false,
        comment_count: 0,
        created_at: "2026-08-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn shelve_groups_by_month_newest_first() {
    let items = [
        memory("a", "2026-07-12"),
        memory("b", "2026-08-06"),
        memory("c", "2026-07-30"),
        memory("d", "2025-12-25"),
    ];
    let books = shelve(&items);

    assert_eq!(books.len(), 3);
    assert_eq!((books[0].year, books[0].month, books[0].count), (2026, 8, 1));
    assert_eq!((books[1].year, books[1].month, books[1].count), (2026, 7, 2));
    assert_eq!((books[2].year, books[2].month, books[2].count), (2025, 12, 1));
}

#[test]
fn shelve_skips_unparseable_dates() {
    let items = [memory("a", "garbage"), memory("b", "2026-08-06")];
    let books = shelve(&items);
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].count, 1);
}

#[test]
fn book_labels_use_month_names() {
    let books = shelve(&[memory("a", "2026-08-06")]);
    assert_eq!(books[0].label(), "August 2026");
}
