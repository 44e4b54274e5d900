//! Difficulty levels and the search policy behind each one.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest search a policy may ask for. Depth 7 and beyond takes far too
/// long with this evaluator to be played interactively.
pub const MAX_DEPTH: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DifficultyError::Unknown(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DifficultyError {
    #[error("unknown difficulty '{0}' (expected easy, medium, hard or expert)")]
    Unknown(String),

    #[error("{level}: depth {depth} exceeds the maximum of {max}", max = MAX_DEPTH)]
    DepthTooLarge { level: Difficulty, depth: u8 },

    #[error("{level}: random move chance {chance} is outside 0..=1")]
    ChanceOutOfRange { level: Difficulty, chance: f64 },
}

/// What the AI does at one level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyPolicy {
    /// Search depth in plies.
    pub depth: u8,
    /// Probability of playing a uniformly random move instead of searching.
    #[serde(default)]
    pub random_move_chance: f64,
}

impl DifficultyPolicy {
    pub const fn search(depth: u8) -> Self {
        Self {
            depth,
            random_move_chance: 0.0,
        }
    }

    pub const fn random() -> Self {
        Self {
            depth: 0,
            random_move_chance: 1.0,
        }
    }

    pub const fn careless(depth: u8, random_move_chance: f64) -> Self {
        Self {
            depth,
            random_move_chance,
        }
    }

    pub fn validate(&self, level: Difficulty) -> Result<(), DifficultyError> {
        if self.depth > MAX_DEPTH {
            return Err(DifficultyError::DepthTooLarge {
                level,
                depth: self.depth,
            });
        }
        if !(0.0..=1.0).contains(&self.random_move_chance) {
            return Err(DifficultyError::ChanceOutOfRange {
                level,
                chance: self.random_move_chance,
            });
        }
        Ok(())
    }
}

/// Policy for every level.
#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyTable {
    policies: BTreeMap<Difficulty, DifficultyPolicy>,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self::network()
    }
}

impl DifficultyTable {
    /// Levels served to networked clients: pure search, no blunders.
    pub fn network() -> Self {
        Self::from_policies([
            DifficultyPolicy::random(),
            DifficultyPolicy::search(1),
            DifficultyPolicy::search(2),
            DifficultyPolicy::search(3),
        ])
    }

    /// Levels for the terminal game: deeper, but medium and hard throw in
    /// a random move now and then.
    pub fn offline() -> Self {
        Self::from_policies([
            DifficultyPolicy::random(),
            DifficultyPolicy::careless(2, 0.3),
            DifficultyPolicy::careless(3, 0.3),
            DifficultyPolicy::search(3),
        ])
    }

    fn from_policies(policies: [DifficultyPolicy; 4]) -> Self {
        Self {
            policies: Difficulty::ALL.into_iter().zip(policies).collect(),
        }
    }

    pub fn policy(&self, level: Difficulty) -> DifficultyPolicy {
        // Every level is inserted on construction and never removed.
        self.policies
            .get(&level)
            .copied()
            .unwrap_or_else(DifficultyPolicy::random)
    }

    /// Replace the policies named in `overrides`, validating each one.
    /// Nothing changes if any of them is invalid.
    pub fn with_overrides(
        mut self,
        overrides: &BTreeMap<Difficulty, DifficultyPolicy>,
    ) -> Result<Self, DifficultyError> {
        for (&level, policy) in overrides {
            policy.validate(level)?;
        }
        self.policies.extend(overrides.iter().map(|(&l, &p)| (l, p)));
        Ok(self)
    }
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
