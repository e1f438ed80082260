//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error objects.

use contact_rpc_core::error::AppError;
use jsonrpsee::types::ErrorObjectOwned;
use serde_json::json;

/// RPC Error Codes
pub mod code {
    pub const DIVISION_BY_ZERO: i32 = 4000;
    pub const NOT_FOUND: i32 = 4004;
    pub const UNIMPLEMENTED: i32 = 4010;
    pub const CANCELLED: i32 = 4099;
    pub const UNKNOWN: i32 = 5000;
    pub const UNAVAILABLE: i32 = 5003;
    pub const DEADLINE_EXCEEDED: i32 = 5004;
}

/// Convert AppError to JSON-RPC ErrorObject
///
/// The message is the error's display text; `data` carries the kind and
/// the structured fields so clients can branch without parsing text.
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    let kind = err.kind().as_str();
    let message = err.to_string();

    let (code, data) = match &err {
        AppError::DivisionByZero { dividend } => (
            code::DIVISION_BY_ZERO,
            json!({ "kind": kind, "dividend": dividend }),
        ),
        AppError::Unimplemented {
            supported,
            requested,
        } => (
            code::UNIMPLEMENTED,
            json!({ "kind": kind, "supported": supported, "requested": requested }),
        ),
        AppError::NotFound { id } => (code::NOT_FOUND, json!({ "kind": kind, "id": id })),
        AppError::Unavailable(_) => (
            code::UNAVAILABLE,
            json!({ "kind": kind, "retryable": true }),
        ),
        AppError::Unknown { context, .. } => (
            code::UNKNOWN,
            json!({ "kind": kind, "context": context }),
        ),
        AppError::Cancelled => (code::CANCELLED, json!({ "kind": kind })),
        AppError::DeadlineExceeded => (code::DEADLINE_EXCEEDED, json!({ "kind": kind })),
    };

    ErrorObjectOwned::owned(code, message, Some(data))
}
