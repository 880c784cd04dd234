//! Tagged error type for the REST boundary.
//!
//! DESIGN
//! ======
//! Every HTTP call classifies its failure exactly once, here, into a closed
//! enum. Downstream code (the bootstrap flow, page handlers) branches with a
//! single match instead of inspecting status codes or error strings.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a REST call, classified at the response boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the session credential (HTTP 401).
    #[error("session rejected")]
    Unauthorized,
    /// The requested resource does not exist (HTTP 404).
    #[error("not found")]
    NotFound,
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// Any other non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            other => Self::Status(other),
        }
    }
}
