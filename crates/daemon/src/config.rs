//! Daemon configuration from flags and environment

use crate::logging::LogFormat;
use clap::Parser;
use contact_rpc_api::RpcServerConfig;
use contact_rpc_infra_sqlite::PoolSettings;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DB_PATH: &str = "~/.contact-rpc/contacts.db";

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-rpc-server")]
#[command(about = "Contact RPC server", long_about = None)]
#[command(version)]
pub struct Config {
    /// Address to listen on (host:port)
    #[arg(long, env = "CONTACT_RPC_LISTEN", default_value = "127.0.0.1:1234")]
    pub listen: String,

    /// SQLite database file
    #[arg(long, env = "CONTACT_RPC_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: String,

    /// Maximum pooled connections
    #[arg(long, env = "CONTACT_RPC_POOL_SIZE", default_value_t = 10)]
    pub pool_size: u32,

    /// How long a call waits for a free connection
    #[arg(long, env = "CONTACT_RPC_ACQUIRE_TIMEOUT_MS", default_value_t = 3000)]
    pub acquire_timeout_ms: u64,

    /// Deadline for a whole call
    #[arg(long, env = "CONTACT_RPC_CALL_TIMEOUT_MS", default_value_t = 5000)]
    pub call_timeout_ms: u64,

    /// Insert the demo contacts when the table is empty
    #[arg(long, env = "CONTACT_RPC_SEED_DEMO")]
    pub seed_demo: bool,

    /// Console log format
    #[arg(long, env = "CONTACT_RPC_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Also write JSON logs to a daily rolling file in this directory
    #[arg(long, env = "CONTACT_RPC_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Reject settings the server cannot start with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.listen.trim().is_empty() {
            anyhow::bail!("listen address must not be empty");
        }
        if self.pool_size == 0 {
            anyhow::bail!("pool size must be at least 1");
        }
        Ok(())
    }

    /// Database path with `~` expanded
    pub fn db_path(&self) -> String {
        shellexpand::tilde(&self.db_path).into_owned()
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.pool_size,
            acquire_timeout: Duration::from_millis(self.acquire_timeout_ms),
        }
    }

    pub fn server_config(&self) -> RpcServerConfig {
        RpcServerConfig {
            listen: self.listen.clone(),
            call_timeout: Duration::from_millis(self.call_timeout_ms),
        }
    }
}
