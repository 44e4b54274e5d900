//! Server settings, read from an optional TOML file.
//!
//! ```toml
//! bind = "0.0.0.0:3001"
//!
//! [difficulty.hard]
//! depth = 3
//! random_move_chance = 0.1
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use minimax_engine::{Difficulty, DifficultyError, DifficultyPolicy, DifficultyTable};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BIND: &str = "127.0.0.1:3001";

/// Read when no `--config` is given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "chess_server.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid difficulty settings: {0}")]
    Difficulty(#[from] DifficultyError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the relay listens on.
    pub bind: String,
    /// Per-level overrides of the network difficulty table, keyed by
    /// level name.
    pub difficulty: BTreeMap<String, DifficultyPolicy>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            difficulty: BTreeMap::new(),
        }
    }
}

impl ServerConfig {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ServerConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.difficulty_table()?;
        debug!(path = %path.display(), bind = %config.bind, "config loaded");
        Ok(config)
    }

    /// [`DEFAULT_CONFIG_FILE`] if present, defaults otherwise.
    pub fn load_default() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load(DEFAULT_CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    /// The network table with this file's overrides applied.
    pub fn difficulty_table(&self) -> Result<DifficultyTable, ConfigError> {
        let overrides = self
            .difficulty
            .iter()
            .map(|(name, &policy)| name.parse::<Difficulty>().map(|level| (level, policy)))
            .collect::<Result<BTreeMap<_, _>, DifficultyError>>()?;
        Ok(DifficultyTable::network().with_overrides(&overrides)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
