//! Server configuration.

use crate::RegistryLimits;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_boggle::{
    BoardGenerator, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, RandomBoards, SeededBoards,
};
use tracing::{debug, info, instrument};

/// Settings for the game server.
///
/// Every key is optional in the TOML file; missing keys take the defaults
/// below. Command-line flags are applied on top with the `with_*` setters.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    host: String,

    /// Port to bind the HTTP server to.
    port: u16,

    /// Newline-delimited word list. A relative path is looked up in the
    /// working directory, then next to the executable.
    dictionary_path: PathBuf,

    /// Side length of generated boards.
    board_size: usize,

    /// Seed for reproducible boards. Random boards when unset.
    board_seed: Option<u64>,

    /// Most sessions kept at once. 0 disables the cap.
    max_sessions: usize,

    /// Seconds a session may sit idle before eviction. 0 keeps sessions forever.
    session_idle_ttl_secs: u64,

    /// Seconds between idle-session sweeps.
    sweep_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            dictionary_path: PathBuf::from("wordlist.txt"),
            board_size: DEFAULT_BOARD_SIZE,
            board_seed: None,
            max_sessions: 10_000,
            session_idle_ttl_secs: 3600,
            sweep_interval_secs: 60,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Rejects values the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1".to_string()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at most {}",
                MAX_BOARD_SIZE
            )));
        }
        if self.sweep_interval_secs == 0 {
            return Err(ConfigError::new(
                "sweep_interval_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Word list location after resolving a relative path.
    ///
    /// Falls back to the configured path unchanged when neither candidate
    /// exists, so the load failure names what the user asked for.
    pub fn resolved_dictionary_path(&self) -> PathBuf {
        let path = &self.dictionary_path;
        if path.is_absolute() || path.exists() {
            return path.clone();
        }
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(path)))
            .filter(|candidate| candidate.exists());
        match beside_exe {
            Some(candidate) => {
                debug!(path = %candidate.display(), "Using word list next to executable");
                candidate
            }
            None => path.clone(),
        }
    }

    /// Session limits derived from this configuration.
    pub fn limits(&self) -> RegistryLimits {
        RegistryLimits::new(
            (self.max_sessions > 0).then_some(self.max_sessions),
            (self.session_idle_ttl_secs > 0)
                .then(|| Duration::from_secs(self.session_idle_ttl_secs)),
        )
    }

    /// Board source for new sessions.
    pub fn board_generator(&self) -> Box<dyn BoardGenerator> {
        match self.board_seed {
            Some(seed) => {
                info!(seed, "Using seeded boards");
                Box::new(SeededBoards::new(self.board_size, seed))
            }
            None => Box::new(RandomBoards::new(self.board_size)),
        }
    }

    /// Interval between idle-session sweeps.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
