//! Startup configuration: credentials and endpoint URLs.
//!
//! # Design
//! All five values are read once at process start into an explicit `Config`
//! that gets passed by reference (usually `Arc`) to the client. A missing
//! value is a fatal startup error — there is no per-call fallback. The
//! environment variable names are the service's documented surface.
//!
//! `from_lookup` takes the variable source as a closure so tests can supply a
//! mock environment without touching process-wide state.

use std::fmt;

use crate::auth::Credentials;

pub const API_USERNAME: &str = "API_USERNAME";
pub const API_PASSWORD: &str = "API_PASSWORD";
pub const LIST_URL: &str = "GetEmployee_API_URL";
pub const CREATE_URL: &str = "AddEmployee_API_URL";
pub const DELETE_URL: &str = "RemoveEmployee_API_URL";

/// Process configuration for the employee API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub credentials: Credentials,
    pub list_url: String,
    pub create_url: String,
    pub delete_url: String,
}

/// Fatal startup error: a required configuration value is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingVar(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(f, "missing required configuration: {name}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| lookup(name).ok_or(ConfigError::MissingVar(name));

        Ok(Self {
            credentials: Credentials::new(require(API_USERNAME)?, require(API_PASSWORD)?),
            list_url: require(LIST_URL)?,
            create_url: require(CREATE_URL)?,
            delete_url: require(DELETE_URL)?,
        })
    }
}
