//! SDK Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate.

use serde::{Deserialize, Serialize};

/// A contact record as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub address: String,
}

/// Result of `arith.divide`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Quotient {
    pub quo: i64,
    pub rem: i64,
}

/// Result of `contact.read`
#[derive(Debug, Clone, Deserialize)]
pub struct ReadResponse {
    /// API version the server answered with
    pub api: String,
    pub contact: Contact,
}

/// Result of `contact.read_all`
#[derive(Debug, Clone, Deserialize)]
pub struct ReadAllResponse {
    pub api: String,
    pub contacts: Vec<Contact>,
}
