//! Error types for the employee API client.
//!
//! # Design
//! Transport failures and HTTP rejections get separate variants because they
//! log differently: `Unreachable` carries connection-level detail,
//! `ServerRejected` carries the status code. The client does not distinguish
//! 4xx from 5xx beyond that code. None of the carried detail is meant for end
//! users — the store maps every `ApiError` to a generic "try again later"
//! style message and keeps the detail in the logs.

use std::fmt;

use crate::http::TransportError;

/// Errors surfaced by `EmployeeClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response (network/transport).
    Unreachable(String),

    /// The server answered with a non-2xx status.
    ServerRejected(u16),

    /// The response body could not be decoded into the expected type.
    Deserialization(String),

    /// The request payload could not be encoded.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unreachable(detail) => write!(f, "service unreachable: {detail}"),
            ApiError::ServerRejected(status) => write!(f, "server rejected request: HTTP {status}"),
            ApiError::Deserialization(detail) => write!(f, "deserialization failed: {detail}"),
            ApiError::Serialization(detail) => write!(f, "serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        ApiError::Unreachable(error.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_maps_to_unreachable() {
        let err = ApiError::from(TransportError("connection refused".to_string()));
        assert!(matches!(err, ApiError::Unreachable(ref d) if d == "connection refused"));
    }

    #[test]
    fn display_carries_status_code() {
        assert_eq!(
            ApiError::ServerRejected(503).to_string(),
            "server rejected request: HTTP 503"
        );
    }
}
