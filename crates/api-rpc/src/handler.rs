//! RPC Method Handlers
//!
//! Translates wire types into service calls and service results back into
//! wire types or JSON-RPC errors.

use crate::error::to_rpc_error;
use crate::types::{
    ArithRequest, DivideResponse, ReadAllRequest, ReadAllResponse, ReadRequest, ReadResponse,
};
use contact_rpc_core::application::{ArithService, CallContext, CancelToken, ContactService};
use contact_rpc_core::port::{ConnectionPool, IdProvider};
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;
use std::time::Duration;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    arith: ArithService,
    contacts: ContactService,
    id_provider: Arc<dyn IdProvider>,
    call_timeout: Duration,
    cancel: CancelToken,
}

impl RpcHandler {
    pub fn new(
        pool: Arc<dyn ConnectionPool>,
        id_provider: Arc<dyn IdProvider>,
        call_timeout: Duration,
        cancel: CancelToken,
    ) -> Self {
        Self {
            arith: ArithService::new(),
            contacts: ContactService::new(pool),
            id_provider,
            call_timeout,
            cancel,
        }
    }

    /// Fresh context for one incoming call
    fn call_context(&self) -> CallContext {
        CallContext::new(self.id_provider.generate_id())
            .with_timeout(self.call_timeout)
            .with_cancel(self.cancel.clone())
    }

    /// arith.multiply
    pub fn multiply(&self, params: ArithRequest) -> Result<i64, ErrorObjectOwned> {
        Ok(self.arith.multiply(params.into()))
    }

    /// arith.divide
    pub fn divide(&self, params: ArithRequest) -> Result<DivideResponse, ErrorObjectOwned> {
        self.arith
            .divide(params.into())
            .map(DivideResponse::from)
            .map_err(to_rpc_error)
    }

    /// contact.read
    pub async fn read(&self, params: ReadRequest) -> Result<ReadResponse, ErrorObjectOwned> {
        let ctx = self.call_context();
        let contact = self
            .contacts
            .read(&ctx, &params.api, params.id)
            .await
            .map_err(to_rpc_error)?;

        Ok(ReadResponse {
            api: self.contacts.api_version().to_string(),
            contact: contact.into(),
        })
    }

    /// contact.read_all
    pub async fn read_all(
        &self,
        params: ReadAllRequest,
    ) -> Result<ReadAllResponse, ErrorObjectOwned> {
        let ctx = self.call_context();
        let contacts = self
            .contacts
            .read_all(&ctx, &params.api)
            .await
            .map_err(to_rpc_error)?;

        Ok(ReadAllResponse {
            api: self.contacts.api_version().to_string(),
            contacts: contacts.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use async_trait::async_trait;
    use contact_rpc_core::domain::{Contact, ContactId};
    use contact_rpc_core::port::{Connection, PoolError, StoreError};

    struct StaticPool(Vec<Contact>);

    struct StaticConnection(Vec<Contact>);

    #[async_trait]
    impl ConnectionPool for StaticPool {
        async fn acquire(&self) -> Result<Box<dyn Connection>, PoolError> {
            Ok(Box::new(StaticConnection(self.0.clone())))
        }
    }

    #[async_trait]
    impl Connection for StaticConnection {
        async fn find_contact(&mut self, id: ContactId) -> Result<Option<Contact>, StoreError> {
            Ok(self.0.iter().find(|c| c.id == id).cloned())
        }

        async fn list_contacts(&mut self) -> Result<Vec<Contact>, StoreError> {
            Ok(self.0.clone())
        }
    }

    struct FixedId;

    impl IdProvider for FixedId {
        fn generate_id(&self) -> String {
            "call-fixed".to_string()
        }
    }

    fn handler(rows: Vec<Contact>) -> RpcHandler {
        RpcHandler::new(
            Arc::new(StaticPool(rows)),
            Arc::new(FixedId),
            Duration::from_secs(5),
            CancelToken::never(),
        )
    }

    #[test]
    fn test_divide_by_zero_maps_code() {
        let err = handler(vec![])
            .divide(ArithRequest { a: 1, b: 0 })
            .unwrap_err();
        assert_eq!(err.code(), code::DIVISION_BY_ZERO);
    }

    #[test]
    fn test_divide() {
        let res = handler(vec![])
            .divide(ArithRequest { a: 17, b: 5 })
            .unwrap();
        assert_eq!((res.quo, res.rem), (3, 2));
    }

    #[tokio::test]
    async fn test_read_echoes_server_version() {
        let handler = handler(vec![Contact::new(1, "julien", "regnault", "Singapore")]);
        let res = handler
            .read(ReadRequest {
                api: String::new(),
                id: 1,
            })
            .await
            .unwrap();
        assert_eq!(res.api, "v1");
        assert_eq!(res.contact.address, "Singapore");
    }

    #[tokio::test]
    async fn test_read_all_empty() {
        let res = handler(vec![])
            .read_all(ReadAllRequest {
                api: "v1".to_string(),
            })
            .await
            .unwrap();
        assert!(res.contacts.is_empty());
    }

    #[tokio::test]
    async fn test_read_unsupported_api() {
        let err = handler(vec![])
            .read(ReadRequest {
                api: "v2".to_string(),
                id: 1,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), code::UNIMPLEMENTED);
    }
}
