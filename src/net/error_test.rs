use super::*;

#[test]
fn from_status_maps_auth_and_missing_resources() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(404), ApiError::NotFound);
}

#[test]
fn from_status_keeps_other_codes() {
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
    assert_eq!(ApiError::from_status(422), ApiError::Status(422));
}

#[test]
fn display_is_stable_for_logging() {
    assert_eq!(ApiError::Unauthorized.to_string(), "session rejected");
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
}
