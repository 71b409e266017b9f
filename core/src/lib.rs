//! Employee roster synchronization and validation core.
//!
//! # Overview
//! The data layer of a client for a remote employee service: it fetches,
//! creates, and deletes records over HTTP with Basic Auth, validates form
//! input before anything touches the network, and reconciles a single
//! in-memory roster against server-confirmed responses. Presentation,
//! navigation, and toast/alert widgets are external collaborators that
//! consume the store's snapshots and events.
//!
//! # Design
//! - `Config` is built once at startup (fatal if incomplete) and shared by
//!   reference; the `authorization` header is recomputed per request.
//! - `EmployeeClient` splits every operation into `build_*` / `parse_*` so
//!   request construction and response interpretation are testable without
//!   I/O; the [`http::Transport`] seam executes the round-trip.
//! - `EmployeeStore` is the only mutator of the roster, a read-through cache
//!   of server state: full replace on fetch, confirmed-only removal, and
//!   create-then-refresh (the server assigns ids and echoes nothing back).
//! - Expected failures travel as `Result` values, never panics: validation
//!   rejections stop before the network, API failures log detail and surface
//!   generic user messages.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod refresh;
pub mod store;
pub mod types;
pub mod validate;

pub use auth::Credentials;
pub use client::EmployeeClient;
pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use refresh::RefreshTrigger;
pub use store::{CreateError, EmployeeStore, Phase, RefreshOutcome, StoreEvent};
pub use types::{Employee, NewEmployee, RemoveEmployee};
pub use validate::ValidationError;
