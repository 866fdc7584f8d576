//! Art gallery server binary.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use art_gallery::config::Config;
use art_gallery::logging::init_logging;
use art_gallery::{http, Catalog, JsonFileStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.log_format.into());

    let store = JsonFileStore::new(&config.data_file);
    let catalog = Arc::new(
        Catalog::open(store)
            .with_context(|| format!("failed to open catalog {}", config.data_file.display()))?,
    );

    http::serve(catalog.clone(), &config.addr, shutdown_signal())
        .await
        .with_context(|| format!("server on {} failed", config.addr))?;

    catalog.flush().context("final flush failed")?;
    info!("catalog flushed, bye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
