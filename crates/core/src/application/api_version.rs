// API Version Negotiation

use crate::error::{AppError, Result};

/// Version of the API provided by this server
pub const API_VERSION: &str = "v1";

/// Check that the API version requested by a client is supported.
///
/// An empty `requested` means "use the server's current version". Anything
/// else must match `supported` exactly, case included.
pub fn check_api(requested: &str, supported: &str) -> Result<()> {
    if requested.is_empty() || requested == supported {
        return Ok(());
    }
    Err(AppError::Unimplemented {
        supported: supported.to_string(),
        requested: requested.to_string(),
    })
}
