use super::*;

#[test]
fn build_memory_input_trims_and_assembles_payload() {
    let result = build_memory_input(
        "  Beach day  ",
        " We built a sandcastle. ",
        "2026-07-12",
        vec!["https://cdn.example/a.jpg".to_owned()],
        vec!["m1".to_owned()],
    )
    .unwrap();
    assert_eq!(result.title, "Beach day");
    assert_eq!(result.body, "We built a sandcastle.");
    assert_eq!(result.event_date, "2026-07-12");
    assert_eq!(result.participant_ids, vec!["m1".to_owned()]);
}

#[test]
fn build_memory_input_requires_a_title() {
    assert_eq!(
        build_memory_input("   ", "body", "2026-07-12", Vec::new(), Vec::new()),
        Err("Give the memory a title.")
    );
}

#[test]
fn build_memory_input_rejects_invalid_dates() {
    assert_eq!(
        build_memory_input("Title", "", "2026-02-30", Vec::new(), Vec::new()),
        Err("Pick a valid date.")
    );
    assert_eq!(
        build_memory_input("Title", "", "", Vec::new(), Vec::new()),
        Err("Pick a valid date.")
    );
}

#[test]
fn build_memory_input_drops_blank_image_rows() {
    let result = build_memory_input(
        "Title",
        "",
        "2026-07-12",
        vec![String::new(), "  ".to_owned(), "https://cdn.example/a.jpg".to_owned()],
        Vec::new(),
    )
    .unwrap();
    assert_eq!(result.image_urls, vec!["https://cdn.example/a.jpg".to_owned()]);
}
