// Application Layer - Use Cases and Business Logic

pub mod api_version;
pub mod arith;
pub mod contact;
pub mod context;

// Re-exports
pub use api_version::{check_api, API_VERSION};
pub use arith::ArithService;
pub use contact::{ContactService, ScopedConnection};
pub use context::{cancel_channel, CallContext, CancelSender, CancelToken};
