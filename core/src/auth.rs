//! Basic-Auth credential pair and header construction.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Static API credential pair, read once at startup as part of `Config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Basic <base64(username:password)>`, ready for the `authorization`
    /// header. Pure and cheap, so callers recompute it per request rather
    /// than caching the string.
    pub fn authorization_header(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(pair))
    }
}
