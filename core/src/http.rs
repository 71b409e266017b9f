//! HTTP transport types and the executor seam.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values without ever opening a socket —
//! whoever owns the process plugs in a [`Transport`] that performs the actual
//! exchange. This keeps request construction and response interpretation
//! deterministic and testable offline, and lets tests script responses.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved freely
//! between the store, the transport, and test fixtures.

use std::fmt;
use std::future::Future;

/// HTTP method for a request. The employee API only ever issues GET (list)
/// and POST (create, delete).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `EmployeeClient::build_*` methods. `url` is the full endpoint
/// URL from configuration; headers always include `authorization`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the [`Transport`] after executing an `HttpRequest`, then
/// passed to `EmployeeClient::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network or connection failure below the HTTP layer.
///
/// The detail string is for logs; it never reaches user-facing messages.
#[derive(Debug, Clone)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failure: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Executes one HTTP round-trip.
///
/// Non-2xx statuses are data, not errors: the transport must return the
/// response as-is and reserve `Err` for failures where no response exists
/// (DNS, refused connection, broken stream). Status interpretation belongs to
/// the client's `parse_*` methods.
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
