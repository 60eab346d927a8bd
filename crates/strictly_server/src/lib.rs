//! Strictly Boggle server - word-search games over HTTP and MCP
//!
//! # Architecture
//!
//! - **Registry**: live sessions keyed by id, each behind its own lock
//! - **API**: REST endpoints for browser frontends (axum)
//! - **MCP**: tool interface for agent players (stdio)
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strictly_boggle::{Dictionary, RandomBoards};
//! use strictly_server::{RegistryLimits, SessionRegistry};
//!
//! let registry = SessionRegistry::new(
//!     Arc::new(Dictionary::from_words(["cat"])),
//!     RandomBoards::new(4),
//!     RegistryLimits::default(),
//! );
//! let (id, snapshot) = registry.create();
//! assert_eq!(snapshot.score, 0);
//! assert!(registry.snapshot(&id).is_ok());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
mod config;
mod error;
mod mcp;
mod registry;
mod server;

pub use api::router;
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorBody};
pub use mcp::{BoggleServer, GetStateRequest, NewSessionResponse, SubmitWordRequest};
pub use registry::{RegistryError, RegistryLimits, SessionHandle, SessionId, SessionRegistry};
pub use server::{build_registry, run_http, run_mcp, spawn_sweeper};
