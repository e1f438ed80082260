//! Simple SDK Example
//!
//! # Usage
//!
//! 1. Start the server with demo data:
//!    ```bash
//!    cargo run --package contact-rpc-daemon -- --seed-demo
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package contact-rpc-sdk --example simple
//!    ```

use contact_rpc_sdk::{ContactRpcClient, RemoteErrorKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ContactRpcClient::connect("http://127.0.0.1:1234").await?;

    println!("6 * 7 = {}", client.multiply(6, 7).await?);

    let q = client.divide(17, 5).await?;
    println!("17 / 5 = {} remainder {}", q.quo, q.rem);

    let all = client.read_all("v1").await?;
    println!("{} contacts (api {})", all.contacts.len(), all.api);
    for contact in &all.contacts {
        println!(
            "  {} {} {} - {}",
            contact.id, contact.firstname, contact.lastname, contact.address
        );
    }

    match client.read("v2", 1).await {
        Err(e) if e.remote_kind() == Some(RemoteErrorKind::Unimplemented) => {
            println!("v2 not served: {}", e)
        }
        other => println!("unexpected: {:?}", other.map(|r| r.api)),
    }

    Ok(())
}
