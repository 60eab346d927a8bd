//! Command-line interface for strictly_boggle.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Boggle - word-search game server
#[derive(Parser, Debug)]
#[command(name = "strictly_boggle")]
#[command(about = "Word-search game server with REST and MCP interfaces", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Word list to load, overriding the config file. Relative paths are
    /// tried in the working directory, then next to the executable
    #[arg(short, long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Http {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Run the MCP game server (stdio mode)
    Mcp,
}
