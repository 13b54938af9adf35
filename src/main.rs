//! Buyer Intake MCP Server - main entry point.

use anyhow::Result;
use buyer_intake::client::{AsyncBuyerClient, AsyncBuyerClientImpl};
use buyer_intake::repositories::{ApiBuyerRepository, BuyerRepository};
use buyer_intake::services::{IntakeService, IntakeServiceImpl};
use buyer_intake::{BuyerClient, BuyerIntakeServer, Config, Metrics};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    // stderr only; stdout carries MCP traffic
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Buyer Intake MCP Server with API URL: {}",
        config.buyer_api_url
    );

    let metrics = Metrics::new();

    let sync_client = BuyerClient::new(&config).with_metrics(metrics.clone());
    let client = Arc::new(AsyncBuyerClientImpl::new(sync_client)) as Arc<dyn AsyncBuyerClient>;

    let repository = Arc::new(ApiBuyerRepository::new(client)) as Arc<dyn BuyerRepository>;

    let intake_service = Arc::new(IntakeServiceImpl::new(
        repository,
        metrics,
        config.buyer_list_cache_ttl_secs(),
    )) as Arc<dyn IntakeService>;

    let server = BuyerIntakeServer::new(intake_service);

    info!(
        "Buyer list cache TTL: {} minutes",
        config.buyer_list_cache_ttl_minutes
    );

    info!("Starting MCP server with stdio transport");
    buyer_intake::server::run_server(server).await?;

    info!("Buyer Intake MCP Server shutdown complete");
    Ok(())
}
