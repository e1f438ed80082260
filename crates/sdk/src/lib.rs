//! Contact RPC SDK - Rust Client Library
//!
//! Typed client for the arithmetic and contact methods of the Contact RPC
//! server.
//!
//! # Example
//!
//! ```no_run
//! use contact_rpc_sdk::ContactRpcClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ContactRpcClient::connect("http://127.0.0.1:1234").await?;
//!
//!     let q = client.divide(17, 5).await?;
//!     println!("17 / 5 = {} remainder {}", q.quo, q.rem);
//!
//!     for contact in client.read_all("v1").await?.contacts {
//!         println!("{}: {} {}", contact.id, contact.firstname, contact.lastname);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::ContactRpcClient;
pub use error::{RemoteErrorKind, Result, SdkError};
pub use types::{Contact, Quotient, ReadAllResponse, ReadResponse};
