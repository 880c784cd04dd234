use super::*;

#[test]
fn render_markdown_produces_paragraphs_and_emphasis() {
    let html = render_markdown("We built a **huge** sandcastle.");
    assert!(html.contains("<p>"));
    assert!(html.contains("<strong>huge</strong>"));
}

#[test]
fn render_markdown_of_empty_body_is_empty() {
    assert_eq!(render_markdown(""), "");
}

#[test]
fn validate_comment_input_trims_and_requires_text() {
    assert_eq!(validate_comment_input("  Lovely!  "), Ok("Lovely!".to_owned()));
    assert_eq!(validate_comment_input("   "), Err("Write a comment first."));
}

#[test]
fn validate_comment_input_bounds_length() {
    let long = "a".repeat(501);
    assert_eq!(
        validate_comment_input(&long),
        Err("Comments are limited to 500 characters.")
    );
    let ok = "a".repeat(500);
    assert!(validate_comment_input(&ok).is_ok());
}
