// YNAB MCP server binary

use anyhow::{Context, Result};
use std::sync::Arc;
use ynab_client::{Config, YnabClient};
use ynab_mcp::server::assert_catalog_nonempty;
use ynab_mcp::tools::all_tools;
use ynab_mcp::McpServer;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr; stdout is the protocol channel.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("YNAB MCP server starting");

    // Configuration errors are fatal: exit non-zero before serving anything.
    let config = Config::from_env().context("configuration")?;
    let client = Arc::new(YnabClient::new(config).context("client setup")?);

    let registry = all_tools(client);
    assert_catalog_nonempty(&registry)?;
    tracing::info!(tools = registry.len(), "registered tools");

    let server = McpServer::new(registry);
    server.run().await?;

    Ok(())
}
