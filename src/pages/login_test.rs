use super::*;

#[test]
fn validate_login_input_trims_and_requires_both_fields() {
    assert_eq!(
        validate_login_input("  kim@example.com  ", " hunter2 "),
        Ok(("kim@example.com".to_owned(), "hunter2".to_owned()))
    );
    assert_eq!(
        validate_login_input("", "hunter2"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("kim@example.com", "   "),
        Err("Enter both email and password.")
    );
}

#[test]
fn every_bootstrap_reason_code_has_a_message() {
    for code in [
        "no-token",
        "token-invalid",
        "user-not-found",
        "network-error",
        "validation-failed",
        "family-fetch-error",
        "timeout",
    ] {
        assert!(message_for_reason(code).is_some(), "missing message for {code}");
    }
}

#[test]
fn unknown_reason_codes_render_nothing() {
    assert_eq!(message_for_reason("surprise"), None);
    assert_eq!(message_for_reason(""), None);
}

#[test]
fn no_token_reads_as_neutral_not_as_an_error() {
    assert_eq!(message_for_reason("no-token"), Some("Please sign in."));
}
