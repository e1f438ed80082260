//! Contact RPC CLI - Command-line client for the Contact RPC server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use contact_rpc_sdk::{Contact, ContactRpcClient, SdkError};
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:1234";

#[derive(Parser)]
#[command(name = "contact-rpc")]
#[command(about = "Contact RPC CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "CONTACT_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiply two integers
    Multiply {
        #[arg(allow_hyphen_values = true)]
        a: i64,
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },

    /// Integer division with remainder
    Divide {
        #[arg(allow_hyphen_values = true)]
        a: i64,
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },

    /// Read one contact
    Read {
        /// Contact ID
        #[arg(allow_hyphen_values = true)]
        id: i64,

        /// API version (empty accepts the server's)
        #[arg(long, default_value = "")]
        api: String,
    },

    /// List every contact
    List {
        /// API version (empty accepts the server's)
        #[arg(long, default_value = "")]
        api: String,
    },
}

#[derive(Tabled)]
struct ContactRow {
    id: i64,
    firstname: String,
    lastname: String,
    address: String,
}

impl From<Contact> for ContactRow {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            firstname: c.firstname,
            lastname: c.lastname,
            address: c.address,
        }
    }
}

#[derive(Tabled)]
struct QuotientRow {
    dividend: i64,
    divisor: i64,
    quotient: i64,
    remainder: i64,
}

fn print_failure(err: &SdkError) {
    let label = match err.remote_kind() {
        Some(kind) => format!("✗ {:?}", kind),
        None => "✗ Request failed".to_string(),
    };
    eprintln!("{}", label.red().bold());
    if err.is_retryable() {
        eprintln!("  {}", "(transient, retry may succeed)".yellow());
    }
}

async fn run(cli: Cli) -> Result<(), SdkError> {
    let client = ContactRpcClient::connect(&cli.rpc_url).await?;

    match cli.command {
        Commands::Multiply { a, b } => {
            let product = client.multiply(a, b).await?;
            println!("{} {} * {} = {}", "✓".green(), a, b, product.to_string().bold());
        }

        Commands::Divide { a, b } => {
            let q = client.divide(a, b).await?;
            let row = QuotientRow {
                dividend: a,
                divisor: b,
                quotient: q.quo,
                remainder: q.rem,
            };
            println!("{}", Table::new(vec![row]));
        }

        Commands::Read { id, api } => {
            let response = client.read(&api, id).await?;
            println!(
                "{}",
                format!("✓ Contact {} (api {})", id, response.api).green().bold()
            );
            println!();
            println!("{}", Table::new(vec![ContactRow::from(response.contact)]));
        }

        Commands::List { api } => {
            let response = client.read_all(&api).await?;
            if response.contacts.is_empty() {
                println!("{}", "No contacts".yellow());
                return Ok(());
            }

            println!(
                "{}",
                format!("{} contacts (api {})", response.contacts.len(), response.api)
                    .cyan()
                    .bold()
            );
            println!();
            let rows: Vec<ContactRow> = response.contacts.into_iter().map(Into::into).collect();
            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let url = cli.rpc_url.clone();

    if let Err(err) = run(cli).await {
        print_failure(&err);
        return Err(err).with_context(|| format!("call to {} failed", url));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_operands() {
        let cli = Cli::try_parse_from(["contact-rpc", "divide", "-7", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Divide { a: -7, b: 2 }));
    }

    #[test]
    fn test_read_api_defaults_empty() {
        let cli = Cli::try_parse_from(["contact-rpc", "read", "3"]).unwrap();
        match cli.command {
            Commands::Read { id, api } => {
                assert_eq!(id, 3);
                assert!(api.is_empty());
            }
            _ => panic!("expected read"),
        }
    }

    #[test]
    fn test_list_with_api() {
        let cli = Cli::try_parse_from(["contact-rpc", "list", "--api", "v1"]).unwrap();
        assert!(matches!(cli.command, Commands::List { api } if api == "v1"));
    }
}
