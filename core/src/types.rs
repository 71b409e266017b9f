//! Domain DTOs for the employee API.
//!
//! # Design
//! Field names are renamed to the wire's `employeeID`/`employeeName` casing
//! so the structs stay idiomatic Rust while serializing exactly what the
//! server expects. The mock-server crate defines its own mirror types;
//! integration tests catch any schema drift between the two.
//!
//! Serialized field order matters for the form-encoded payloads: serde emits
//! fields in declaration order, and `NewEmployee` declares them in the order
//! the create endpoint documents (`employeeName`, `employeeAge`,
//! `employeeEmail`).

use serde::{Deserialize, Serialize};

/// A single employee record returned by the list endpoint.
///
/// `id` is assigned by the server and is the list's stable identity key;
/// the client never invents or reuses one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    #[serde(rename = "employeeID")]
    pub id: u64,
    #[serde(rename = "employeeName")]
    pub name: String,
    #[serde(rename = "employeeAge")]
    pub age: u32,
    #[serde(rename = "employeeEmail")]
    pub email: String,
}

/// Validated payload for the create endpoint.
///
/// Only the validation engine constructs one, so a `NewEmployee` always
/// carries a trimmed name, a positive age, and a well-formed email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEmployee {
    #[serde(rename = "employeeName")]
    pub name: String,
    #[serde(rename = "employeeAge")]
    pub age: u32,
    #[serde(rename = "employeeEmail")]
    pub email: String,
}

/// Payload for the delete endpoint: a single form field naming the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveEmployee {
    #[serde(rename = "employeeID")]
    pub id: u64,
}
