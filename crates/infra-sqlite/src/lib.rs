// Contact RPC Infrastructure - SQLite Adapter
// Implements: ConnectionPool / Connection over an sqlx SQLite pool

mod connection;
mod error;
mod migration;
mod pool;
mod seed;

pub use connection::{create_pool, PoolSettings};
pub use migration::{current_version, run_migrations};
pub use pool::{SqliteConnection, SqliteConnectionPool};
pub use seed::{demo_contacts, insert_contacts, seed_demo_contacts};
