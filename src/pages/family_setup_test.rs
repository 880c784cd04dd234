use super::*;

#[test]
fn normalize_invite_code_uppercases_and_trims() {
    assert_eq!(normalize_invite_code("  abc123 "), Ok("ABC123".to_owned()));
}

#[test]
fn normalize_invite_code_requires_six_alphanumerics() {
    assert!(normalize_invite_code("ABC12").is_err());
    assert!(normalize_invite_code("ABC1234").is_err());
    assert!(normalize_invite_code("AB-123").is_err());
    assert!(normalize_invite_code("").is_err());
}

#[test]
fn validate_family_name_trims_and_requires_value() {
    assert_eq!(validate_family_name("  The Kims  "), Ok("The Kims".to_owned()));
    assert_eq!(validate_family_name("   "), Err("Give your family a name."));
}
