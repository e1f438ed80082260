//! JSON-RPC Server
//!
//! Implements the JSON-RPC 2.0 server over HTTP. Dispatch is an explicit
//! table from method name to typed handler, built once at startup.

use crate::handler::RpcHandler;
use crate::types::{ArithRequest, ReadAllRequest, ReadRequest};
use contact_rpc_core::application::CancelToken;
use contact_rpc_core::port::{ConnectionPool, IdProvider};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

const DEFAULT_LISTEN: &str = "127.0.0.1:1234";
const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// JSON-RPC method names
pub mod method {
    pub const MULTIPLY: &str = "arith.multiply";
    pub const DIVIDE: &str = "arith.divide";
    pub const READ: &str = "contact.read";
    pub const READ_ALL: &str = "contact.read_all";

    /// Every method the server must expose
    pub const ALL: [&str; 4] = [MULTIPLY, DIVIDE, READ, READ_ALL];
}

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    /// `host:port` to bind
    pub listen: String,
    /// Deadline applied to every call
    pub call_timeout: Duration,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen address: '{0}'")]
    InvalidListen(String),

    #[error("failed to register method {method}: {reason}")]
    Register {
        method: &'static str,
        reason: String,
    },

    #[error("method table is missing {0}")]
    MissingMethod(&'static str),

    #[error("failed to build server on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Build the dispatch table: one typed handler per method name.
///
/// Fails if a name is registered twice or a method in [`method::ALL`] is
/// left out, so a broken table never reaches the listener.
pub fn build_module(handler: RpcHandler) -> Result<RpcModule<RpcHandler>, ServerError> {
    let mut module = RpcModule::new(handler);

    module
        .register_method(method::MULTIPLY, |params, handler, _| {
            let req: ArithRequest = params.parse()?;
            handler.multiply(req)
        })
        .map_err(|e| register_error(method::MULTIPLY, e))?;

    module
        .register_method(method::DIVIDE, |params, handler, _| {
            let req: ArithRequest = params.parse()?;
            handler.divide(req)
        })
        .map_err(|e| register_error(method::DIVIDE, e))?;

    module
        .register_async_method(method::READ, |params, handler, _| async move {
            let req: ReadRequest = params.parse()?;
            handler.read(req).await
        })
        .map_err(|e| register_error(method::READ, e))?;

    module
        .register_async_method(method::READ_ALL, |params, handler, _| async move {
            let req: ReadAllRequest = params.parse()?;
            handler.read_all(req).await
        })
        .map_err(|e| register_error(method::READ_ALL, e))?;

    validate_methods(&module)?;
    Ok(module)
}

fn register_error(method: &'static str, err: impl std::fmt::Display) -> ServerError {
    ServerError::Register {
        method,
        reason: err.to_string(),
    }
}

fn validate_methods<C>(module: &RpcModule<C>) -> Result<(), ServerError> {
    let registered: Vec<&'static str> = module.method_names().collect();
    match method::ALL.iter().find(|m| !registered.contains(m)) {
        Some(missing) => Err(ServerError::MissingMethod(missing)),
        None => Ok(()),
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: RpcHandler,
}

impl RpcServer {
    pub fn new(
        config: RpcServerConfig,
        pool: Arc<dyn ConnectionPool>,
        id_provider: Arc<dyn IdProvider>,
        cancel: CancelToken,
    ) -> Self {
        let handler = RpcHandler::new(pool, id_provider, config.call_timeout, cancel);
        Self { config, handler }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful with port 0) and the handle used to
    /// stop the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), ServerError> {
        let addr = self.config.listen.trim().to_string();
        if addr.is_empty() {
            return Err(ServerError::InvalidListen(self.config.listen));
        }

        let module = build_module(self.handler)?;

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = server
            .local_addr()
            .map_err(|source| ServerError::Bind { addr, source })?;

        info!(
            addr = %local_addr,
            call_timeout_ms = self.config.call_timeout.as_millis() as u64,
            methods = ?method::ALL,
            "JSON-RPC server started"
        );

        let handle = server.start(module);
        Ok((local_addr, handle))
    }
}
