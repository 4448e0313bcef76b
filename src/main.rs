//! Tidmat API Server
//!
//! Serves the campaign storefront and forwards contract reads and
//! contribution submissions to the Aptos network.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tidmat::app_state::AppState;
use tidmat::config::AppConfig;
use tidmat::routes;
use tidmat::sdk::TidmatSdk;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(AppConfig::from_env().context("invalid configuration")?);
    let network = config.network_info();
    info!(
        network = %network.network,
        node_url = %config.node_url,
        module_address = %config.contracts.module_address,
        "using {} (chain id {})",
        network.name,
        network.chain_id
    );

    let sdk = TidmatSdk::from_config(&config).context("failed to build chain clients")?;
    let state = AppState::new(config.clone(), Arc::new(sdk));
    let app = routes::app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
