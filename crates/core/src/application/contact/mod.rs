// Contact Service - read-only lookups over the Contacts store

mod scoped;


pub use scoped::ScopedConnection;

use crate::application::api_version::{check_api, API_VERSION};
use crate::application::context::CallContext;
use crate::domain::{Contact, ContactId};
use crate::error::{AppError, Result};
use crate::port::{ConnectionPool, StoreError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Contact Service
///
/// Holds no per-call state: every call validates the API version, borrows
/// one connection for its own duration and hands it back before returning.
pub struct ContactService {
    pool: Arc<dyn ConnectionPool>,
}

impl ContactService {
    pub fn new(pool: Arc<dyn ConnectionPool>) -> Self {
        Self { pool }
    }

    /// API version implemented by this service
    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Read a single contact by ID
    ///
    /// # Errors
    /// * `Unimplemented` - `api` is neither empty nor the supported version
    /// * `Unavailable` - no connection could be obtained from the pool
    /// * `Unknown` - the query or row mapping failed
    /// * `NotFound` - no row with this ID
    /// * `Cancelled` / `DeadlineExceeded` - the call context fired first
    #[tracing::instrument(name = "contact.read", skip_all, fields(call_id = %ctx.call_id(), api = %api, id = id))]
    pub async fn read(&self, ctx: &CallContext, api: &str, id: ContactId) -> Result<Contact> {
        let result = self.read_contact(ctx, api, id).await;
        log_failure(&result);
        result
    }

    /// Read every contact, in store order
    ///
    /// An empty store yields an empty list, not an error.
    ///
    /// # Errors
    /// Same as [`ContactService::read`], minus `NotFound`.
    #[tracing::instrument(name = "contact.read_all", skip_all, fields(call_id = %ctx.call_id(), api = %api))]
    pub async fn read_all(&self, ctx: &CallContext, api: &str) -> Result<Vec<Contact>> {
        let result = self.read_all_contacts(ctx, api).await;
        log_failure(&result);
        result
    }

    async fn read_contact(&self, ctx: &CallContext, api: &str, id: ContactId) -> Result<Contact> {
        check_api(api, API_VERSION)?;

        let mut conn = ScopedConnection::acquire(self.pool.as_ref(), ctx).await?;

        let found = ctx
            .run(conn.find_contact(id))
            .await?
            .map_err(store_failure)?;

        match found {
            Some(contact) => {
                debug!("contact found");
                Ok(contact)
            }
            None => Err(AppError::NotFound { id }),
        }
    }

    async fn read_all_contacts(&self, ctx: &CallContext, api: &str) -> Result<Vec<Contact>> {
        check_api(api, API_VERSION)?;

        let mut conn = ScopedConnection::acquire(self.pool.as_ref(), ctx).await?;

        let contacts = ctx
            .run(conn.list_contacts())
            .await?
            .map_err(store_failure)?;

        debug!(count = contacts.len(), "contacts listed");
        Ok(contacts)
    }
}

fn store_failure(source: StoreError) -> AppError {
    let context = match source {
        StoreError::Query(_) => "failed to select from Contacts",
        StoreError::Mapping(_) => "failed to retrieve field values from Contact row",
    };
    AppError::Unknown { context, source }
}

fn log_failure<T>(result: &Result<T>) {
    match result {
        // Expected outcome, not a fault
        Err(err @ AppError::NotFound { .. }) => debug!(kind = %err.kind(), "{err}"),
        Err(err) => warn!(kind = %err.kind(), retryable = err.is_retryable(), "{err}"),
        Ok(_) => {}
    }
}
