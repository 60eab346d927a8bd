//! Strictly Boggle - Unified CLI
//!
//! Word-search game server with REST and MCP modes.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_server::ServerConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(dictionary) = cli.dictionary {
        config = config.with_dictionary_path(dictionary);
    }

    match cli.command {
        Command::Http { port, host } => {
            if let Some(port) = port {
                config = config.with_port(port);
            }
            if let Some(host) = host {
                config = config.with_host(host);
            }
            info!(?config, "Starting HTTP server");
            strictly_server::run_http(config).await
        }
        Command::Mcp => {
            info!(?config, "Starting MCP server");
            strictly_server::run_mcp(config).await
        }
    }
}
