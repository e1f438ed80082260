// Scoped connection guard

use crate::application::context::CallContext;
use crate::error::{AppError, Result};
use crate::port::{Connection, ConnectionPool};
use std::ops::{Deref, DerefMut};
use tokio::time::Instant;
use tracing::debug;

/// A connection borrowed for exactly one call.
///
/// Dropping the guard hands the connection back to its pool, so every exit
/// path of a call (success, `?`, cancellation dropping the future) releases it.
pub struct ScopedConnection {
    conn: Box<dyn Connection>,
    acquired_at: Instant,
}

impl ScopedConnection {
    /// Acquire a connection, bounded by the call's deadline and cancellation
    pub async fn acquire(pool: &dyn ConnectionPool, ctx: &CallContext) -> Result<Self> {
        let conn = ctx.run(pool.acquire()).await?.map_err(AppError::Unavailable)?;
        debug!("connection acquired");
        Ok(Self {
            conn,
            acquired_at: Instant::now(),
        })
    }
}

impl Deref for ScopedConnection {
    type Target = dyn Connection;

    fn deref(&self) -> &Self::Target {
        self.conn.as_ref()
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.conn.as_mut()
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        debug!(
            held_ms = self.acquired_at.elapsed().as_millis() as u64,
            "connection released"
        );
    }
}
