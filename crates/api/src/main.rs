//! Climate Observation API - Main Entry Point

use api::config::ApiConfig;
use api::{init_logging, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::load()?;
    init_logging(&config.logging.level);

    info!(
        "=== Climate Observation API v{} ===",
        env!("CARGO_PKG_VERSION")
    );

    run_server(&config).await?;

    Ok(())
}
