//! Optional TOML settings for the terminal game.
//!
//! ```toml
//! difficulty = "hard"
//! mode = "ai"
//!
//! [levels.medium]
//! depth = 2
//! random_move_chance = 0.2
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use minimax_engine::{Difficulty, DifficultyError, DifficultyPolicy, DifficultyTable};
use serde::Deserialize;
use thiserror::Error;

use crate::app::{Mode, ModeError};

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

    #[error(transparent)]
    Difficulty(#[from] DifficultyError),

    #[error(transparent)]
    Mode(#[from] ModeError),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OfflineConfig {
    /// Starting level name.
    pub difficulty: Option<String>,
    /// `ai` or `local`.
    pub mode: Option<String>,
    /// Overrides of the offline difficulty table, keyed by level name.
    pub levels: BTreeMap<String, DifficultyPolicy>,
}

impl OfflineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: OfflineConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.table()?;
        config.starting_difficulty()?;
        config.starting_mode()?;
        Ok(config)
    }

    pub fn table(&self) -> Result<DifficultyTable, ConfigError> {
        let overrides = self
            .levels
            .iter()
            .map(|(name, &policy)| name.parse::<Difficulty>().map(|level| (level, policy)))
            .collect::<Result<BTreeMap<_, _>, DifficultyError>>()?;
        Ok(DifficultyTable::offline().with_overrides(&overrides)?)
    }

    pub fn starting_difficulty(&self) -> Result<Difficulty, ConfigError> {
        match &self.difficulty {
            Some(name) => Ok(name.parse()?),
            None => Ok(Difficulty::Medium),
        }
    }

    pub fn starting_mode(&self) -> Result<Mode, ConfigError> {
        match &self.mode {
            Some(name) => Ok(name.parse()?),
            None => Ok(Mode::Ai),
        }
    }
}
