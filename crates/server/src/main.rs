//! jobpost MCP server entry point.
//!
//! Boots the MCP server on stdio transport with a shared description cache and
//! its background sweeper. Logging goes to stderr to avoid interfering with the
//! JSON-RPC protocol on stdout.

use anyhow::Result;
use jobpost_client::JobService;
use jobpost_core::{AppConfig, CacheSweeper};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let service = JobService::from_config(&config)?;
    let sweeper = CacheSweeper::start(service.cache().clone(), config.cache_sweep_interval());

    tracing::info!(
        ttl_secs = config.cache_ttl_secs,
        sweep_interval_secs = config.cache_sweep_interval_secs,
        "Starting jobpost MCP server on stdio transport"
    );

    let handler = handler::JobPostServer::new(service);
    let server = serve_server(handler, stdio()).await?;

    let quit = server.waiting().await;
    sweeper.stop().await;
    quit?;

    Ok(())
}
