use anyhow::{Context, Result};
use openopus_mcp::{http, stdio, OpusConfig, OpusServer};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env for local dev (if present)
    let env_loaded = dotenvy::dotenv().is_ok();

    let config = match std::env::var("OPENOPUS_MCP_CONFIG") {
        Ok(path) => OpusConfig::from_file(&path),
        Err(_) => OpusConfig::from_env(),
    }
    .context("failed to load configuration")?;

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("openopus_mcp={}", config.server.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if env_loaded {
        tracing::info!("Loaded .env");
    }
    tracing::info!(
        "Configuration loaded: transport={}, port={}, catalog={}",
        config.server.transport,
        config.server.port,
        config.catalog.api_url
    );

    let server = Arc::new(
        OpusServer::new(config.clone()).context("failed to build catalog client")?,
    );
    let tools = server.get_tools();
    tracing::info!("Available tools: {}", tools.len());
    for tool in tools {
        tracing::info!("  - {}: {}", tool.name, tool.description);
    }

    match config.server.transport.to_lowercase().as_str() {
        "http" => {
            let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            runtime.block_on(http::run_http_server(Arc::clone(&server), &config))?;
        }
        _ => {
            tracing::info!("OpenOpus MCP Server running with stdio transport");
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            stdio::serve(&server, stdin.lock(), stdout.lock())
                .context("stdio transport failed")?;
        }
    }

    tracing::info!("OpenOpus MCP Server shutting down");
    Ok(())
}
