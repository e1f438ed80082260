// sqlx error mapping
//
// Orphan rules keep `From<sqlx::Error>` out of core, so adapters convert
// explicitly through these helpers.

use contact_rpc_core::port::{PoolError, StoreError};

/// Map a failure from `pool.acquire()`
pub(crate) fn map_acquire_error(err: sqlx::Error) -> PoolError {
    match err {
        sqlx::Error::PoolTimedOut => PoolError::Timeout,
        sqlx::Error::PoolClosed => PoolError::Closed,
        other => PoolError::Connect(other.to_string()),
    }
}

/// Map a failure from running a query or decoding its rows
pub(crate) fn map_query_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => StoreError::Mapping(err.to_string()),
        sqlx::Error::Database(db_err) => {
            // SQLite result codes: https://www.sqlite.org/rescode.html
            match db_err.code() {
                Some(code) if code == "5" => StoreError::Query(format!(
                    "database locked (SQLITE_BUSY): {}",
                    db_err.message()
                )),
                Some(code) => StoreError::Query(format!(
                    "database error [{}]: {}",
                    code,
                    db_err.message()
                )),
                None => StoreError::Query(format!("database error: {}", db_err.message())),
            }
        }
        _ => StoreError::Query(err.to_string()),
    }
}
