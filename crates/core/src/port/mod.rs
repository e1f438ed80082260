// Port Layer - Interfaces for external dependencies

pub mod connection;
pub mod id_provider; // For deterministic testing

// Re-exports
pub use connection::{Connection, ConnectionPool, PoolError, StoreError};
pub use id_provider::{IdProvider, UuidProvider};
