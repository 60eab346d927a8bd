//! Server startup: wiring config, dictionary and registry to a transport.

use crate::{BoggleServer, ServerConfig, SessionRegistry, api};
use rmcp::ServiceExt;
use std::sync::Arc;
use std::time::Duration;
use strictly_boggle::Dictionary;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Loads the dictionary and builds an empty registry from `config`.
#[instrument(skip(config), fields(dictionary = %config.dictionary_path().display()))]
pub fn build_registry(config: &ServerConfig) -> SessionRegistry {
    let dictionary = Dictionary::load(config.resolved_dictionary_path());
    if dictionary.is_empty() {
        warn!("Dictionary is empty, every word will be rejected");
    }
    SessionRegistry::new(
        Arc::new(dictionary),
        config.board_generator(),
        config.limits(),
    )
}

/// Periodically evicts idle sessions until the runtime shuts down.
pub fn spawn_sweeper(registry: SessionRegistry, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick fires immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let evicted = registry.evict_idle();
            debug!(evicted, active = registry.len(), "Idle sweep finished");
        }
    })
}

/// Runs the REST API until Ctrl-C.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn run_http(config: ServerConfig) -> anyhow::Result<()> {
    let registry = build_registry(&config);
    let sweeper = spawn_sweeper(registry.clone(), config.sweep_interval());

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(addr = %listener.local_addr()?, "Boggle API listening");

    axum::serve(listener, api::router(registry))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!("Server stopped");
    Ok(())
}

/// Runs the MCP tool server on stdin/stdout until the client disconnects.
#[instrument(skip(config))]
pub async fn run_mcp(config: ServerConfig) -> anyhow::Result<()> {
    let registry = build_registry(&config);
    let sweeper = spawn_sweeper(registry.clone(), config.sweep_interval());

    info!("MCP server ready on stdio");
    let service = BoggleServer::new(registry)
        .serve(rmcp::transport::stdio())
        .await?;
    service.waiting().await?;

    sweeper.abort();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
