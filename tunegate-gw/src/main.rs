//! tunegate-gw - Music catalog proxy gateway
//!
//! Sits between web clients and an upstream third-party music-catalog
//! API, normalizing requests and responses so the client never talks to
//! the upstream directly.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tunegate_gw::config::{Cli, GatewayConfig};
use tunegate_gw::mediator::RequestMediator;
use tunegate_gw::services::UpstreamClient;
use tunegate_gw::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init, before any
    // network delays
    info!(
        "Starting tunegate-gw v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = GatewayConfig::resolve(&cli);
    info!("Upstream: {}", config.upstream.base_url);
    info!("Upstream timeout: {}s", config.upstream.timeout_secs);

    let client = UpstreamClient::new(&config.upstream)
        .map_err(|e| anyhow::anyhow!("Failed to build upstream client: {}", e))?;
    let mediator = RequestMediator::new(client);

    let state = AppState::new(mediator);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("tunegate-gw listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
