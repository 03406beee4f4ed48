// src/bin/bactisee_server.rs

use std::net::SocketAddr;

use bactisee::{logging, server};
use color_eyre::eyre::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    // Same fixed address the local runner has always used; the client's
    // default backend points here.
    let addr: SocketAddr = ([127, 0, 0, 1], 3000).into();
    println!("BactiSee backend running locally at http://{}", addr);
    info!("Starting BactiSee backend.");

    server::serve(addr).await
}
