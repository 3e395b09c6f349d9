//! Itemstore API server binary.
//!
//! This binary creates the concrete in-memory store and passes it to the
//! API server. The API layer remains agnostic of the store implementation.

use std::net::IpAddr;

use clap::Parser;
use itemstore::api::{self, ApiError, Config};
use itemstore::store::MemoryStore;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("API server error: {0}")]
    #[diagnostic(code(itemstore::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "itemstore-api")]
#[command(author, version, about = "Itemstore API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Start with an empty store instead of the two seed items
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let store = if cli.no_seed {
        MemoryStore::new()
    } else {
        MemoryStore::seeded()
    };

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        store,
    )
    .await?;

    Ok(())
}
