//! ABN Lookup MCP Server - Main entry point
//!
//! Serves ABN validation and registry lookup tools over the Model Context Protocol
//! on stdio.

use abn_lookup::client::{AsyncRegistryClient, AsyncRegistryClientImpl};
use abn_lookup::{AbnMcpServer, Config, RegistryClient};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config_result = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config_result
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config_result {
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
        "Starting ABN Lookup MCP Server with registry URL: {} (timeout {}s)",
        config.registry_url, config.request_timeout
    );

    let sync_client = RegistryClient::new(&config);
    let client =
        Arc::new(AsyncRegistryClientImpl::new(sync_client)) as Arc<dyn AsyncRegistryClient>;

    let server = AbnMcpServer::new(client);

    info!("Starting MCP server with stdio transport");
    abn_lookup::server::run_server(server).await?;

    info!("ABN Lookup MCP Server shutdown complete");
    Ok(())
}
