// SQLite ConnectionPool Implementation

use crate::error::{map_acquire_error, map_query_error};
use async_trait::async_trait;
use contact_rpc_core::domain::{Contact, ContactId};
use contact_rpc_core::port::{Connection, ConnectionPool, PoolError, StoreError};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const SELECT_CONTACT: &str = "SELECT id, firstname, lastname, address FROM Contacts WHERE id = ?";
const SELECT_CONTACTS: &str = "SELECT id, firstname, lastname, address FROM Contacts";

/// [`ConnectionPool`] backed by an sqlx SQLite pool.
///
/// Also counts the connections it has lent out and not yet had back, which
/// sqlx only reports asynchronously.
#[derive(Clone)]
pub struct SqliteConnectionPool {
    pool: SqlitePool,
    leased: Arc<AtomicUsize>,
}

impl SqliteConnectionPool {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            leased: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Connections currently held by callers
    pub fn leased(&self) -> usize {
        self.leased.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ConnectionPool for SqliteConnectionPool {
    async fn acquire(&self) -> Result<Box<dyn Connection>, PoolError> {
        let conn = self.pool.acquire().await.map_err(map_acquire_error)?;
        Ok(Box::new(SqliteConnection {
            conn,
            _lease: Lease::new(Arc::clone(&self.leased)),
        }))
    }
}

/// Lease counter entry, dropped together with the connection
struct Lease(Arc<AtomicUsize>);

impl Lease {
    fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A pooled SQLite connection; returns to the pool on drop
pub struct SqliteConnection {
    conn: PoolConnection<Sqlite>,
    _lease: Lease,
}

#[async_trait]
impl Connection for SqliteConnection {
    async fn find_contact(&mut self, id: ContactId) -> Result<Option<Contact>, StoreError> {
        let row = sqlx::query_as::<_, ContactRow>(SELECT_CONTACT)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(map_query_error)?;

        Ok(row.map(ContactRow::into_contact))
    }

    async fn list_contacts(&mut self) -> Result<Vec<Contact>, StoreError> {
        let rows = sqlx::query_as::<_, ContactRow>(SELECT_CONTACTS)
            .fetch_all(&mut *self.conn)
            .await
            .map_err(map_query_error)?;

        Ok(rows.into_iter().map(ContactRow::into_contact).collect())
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    id: i64,
    firstname: String,
    lastname: String,
    address: String,
}

impl ContactRow {
    fn into_contact(self) -> Contact {
        Contact {
            id: self.id,
            firstname: self.firstname,
            lastname: self.lastname,
            address: self.address,
        }
    }
}
