// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use temperature_heatmap::application::heatmap_service::HeatmapService;
use temperature_heatmap::infrastructure::config::load_heatmap_config;
use temperature_heatmap::infrastructure::http_dataset_repository::HttpDatasetRepository;
use temperature_heatmap::presentation::app_state::AppState;
use temperature_heatmap::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("temperature_heatmap=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_heatmap_config().context("failed to load configuration")?;

    // Fetch the dataset once, before accepting requests
    let repository = HttpDatasetRepository::new(config.source.url.clone(), config.source.timeout())?;
    tracing::info!("Loading temperature dataset from {}", repository.url());
    let heatmap_service = HeatmapService::load(&repository)
        .await
        .context("failed to load temperature dataset")?;

    let state = Arc::new(AppState {
        heatmap_service,
        default_variant: config.render.default_variant,
    });

    let app = router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind_addr))?;
    tracing::info!("Starting temperature-heatmap service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
