//! Contact RPC Client Implementation

use crate::error::Result;
use crate::error::SdkError;
use crate::types::{Quotient, ReadAllResponse, ReadResponse};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Contact RPC Client
///
/// # Example
///
/// ```no_run
/// use contact_rpc_sdk::ContactRpcClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ContactRpcClient::connect("http://127.0.0.1:1234").await?;
/// assert_eq!(client.multiply(6, 7).await?, 42);
/// # Ok(())
/// # }
/// ```
pub struct ContactRpcClient {
    client: HttpClient,
}

impl ContactRpcClient {
    /// Connect with the default 5 second request timeout
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        Self::connect_with_timeout(url, REQUEST_TIMEOUT).await
    }

    pub async fn connect_with_timeout(url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(timeout)
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// `a * b`
    pub async fn multiply(&self, a: i64, b: i64) -> Result<i64> {
        let product: i64 = self
            .client
            .request("arith.multiply", operands(a, b)?)
            .await?;

        Ok(product)
    }

    /// Truncated quotient and remainder of `a / b`
    pub async fn divide(&self, a: i64, b: i64) -> Result<Quotient> {
        let quotient: Quotient = self.client.request("arith.divide", operands(a, b)?).await?;

        Ok(quotient)
    }

    /// Read one contact
    ///
    /// Pass an empty `api` to accept whatever version the server runs.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use contact_rpc_sdk::ContactRpcClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = ContactRpcClient::connect("http://127.0.0.1:1234").await?;
    /// let response = client.read("v1", 1).await?;
    /// println!("{} {}", response.contact.firstname, response.contact.lastname);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn read(&self, api: &str, id: i64) -> Result<ReadResponse> {
        let mut params = ObjectParams::new();
        params.insert("api", api)?;
        params.insert("id", id)?;

        let response: ReadResponse = self.client.request("contact.read", params).await?;
        Ok(response)
    }

    /// Read every contact
    pub async fn read_all(&self, api: &str) -> Result<ReadAllResponse> {
        let mut params = ObjectParams::new();
        params.insert("api", api)?;

        let response: ReadAllResponse = self.client.request("contact.read_all", params).await?;
        Ok(response)
    }
}

fn operands(a: i64, b: i64) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    params.insert("a", a)?;
    params.insert("b", b)?;
    Ok(params)
}
