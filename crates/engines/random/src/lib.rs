//! Random Move Picker
//!
//! Selects uniformly among the legal moves. The easy difficulty plays
//! through it directly and the harder levels borrow it for their
//! occasional careless move. The random source is a type parameter so
//! tests and replays can inject a seeded generator.

use chess_core::{Engine, Game, Move, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

/// A move picker that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine<R = StdRng> {
    rng: R,
}

impl RandomEngine<StdRng> {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible sequence of picks.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform choice; `None` only for an empty list.
    pub fn pick(&mut self, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.rng).copied()
    }

    /// True with probability `chance`. Values at or below zero (and NaN)
    /// never fire, values at or above one always do.
    pub fn gamble(&mut self, chance: f64) -> bool {
        if !(chance > 0.0) {
            return false;
        }
        self.rng.gen_bool(chance.min(1.0))
    }
}

impl<R: Rng + Send> Engine for RandomEngine<R> {
    fn search(&mut self, game: &Game, _depth: u8) -> SearchResult {
        let moves = game.legal_moves();
        SearchResult {
            best_move: self.pick(&moves),
            score: 0,
            depth: 0,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
