//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use contact_rpc_core::domain;
use serde::{Deserialize, Serialize};

/// arith.multiply / arith.divide - two integer operands
#[derive(Debug, Deserialize)]
pub struct ArithRequest {
    pub a: i64,
    pub b: i64,
}

impl From<ArithRequest> for domain::Operands {
    fn from(req: ArithRequest) -> Self {
        domain::Operands::new(req.a, req.b)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DivideResponse {
    pub quo: i64,
    pub rem: i64,
}

impl From<domain::Quotient> for DivideResponse {
    fn from(q: domain::Quotient) -> Self {
        Self {
            quo: q.quo,
            rem: q.rem,
        }
    }
}

/// Contact as sent over the wire
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub address: String,
}

impl From<domain::Contact> for Contact {
    fn from(c: domain::Contact) -> Self {
        Self {
            id: c.id,
            firstname: c.firstname,
            lastname: c.lastname,
            address: c.address,
        }
    }
}

/// contact.read - Read one contact
#[derive(Debug, Deserialize)]
pub struct ReadRequest {
    /// API version; empty means the server's current version
    #[serde(default)]
    pub api: String,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadResponse {
    pub api: String,
    pub contact: Contact,
}

/// contact.read_all - Read every contact
#[derive(Debug, Deserialize)]
pub struct ReadAllRequest {
    #[serde(default)]
    pub api: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadAllResponse {
    pub api: String,
    pub contacts: Vec<Contact>,
}
