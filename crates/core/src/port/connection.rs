// Connection Pool Port (Interface)

use crate::domain::{Contact, ContactId};
use async_trait::async_trait;
use thiserror::Error;

/// Failure to hand out a connection
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("timed out waiting for a free connection")]
    Timeout,

    #[error("pool is closed")]
    Closed,

    #[error("{0}")]
    Connect(String),
}

/// Failure while running a query or decoding its rows
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Query(String),

    #[error("{0}")]
    Mapping(String),
}

/// Source of short-lived, mutually exclusive store connections.
///
/// Implementations must allow concurrent `acquire` calls. The returned
/// connection goes back to the pool when it is dropped.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionPool: Send + Sync {
    /// Borrow a connection, waiting for capacity if the pool is exhausted
    async fn acquire(&self) -> Result<Box<dyn Connection>, PoolError>;
}

/// Read-only queries over the Contacts table
#[async_trait]
pub trait Connection: Send {
    /// Look up a single contact by ID
    async fn find_contact(&mut self, id: ContactId) -> Result<Option<Contact>, StoreError>;

    /// All contacts in store iteration order
    async fn list_contacts(&mut self) -> Result<Vec<Contact>, StoreError>;
}
