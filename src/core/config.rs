//! Game constants and setup configuration.
//!
//! ## Constants
//!
//! - `SET_SIZE`: cards in a set, also the number of values per attribute
//!   and the number of columns in a grid row
//! - `MAX_ROWS`: a grid row holds `SET_SIZE` cards, so 27 rows hold the
//!   whole 81-card deck
//! - `DECK_SIZE`: 3^4 distinct cards

use serde::{Deserialize, Serialize};

/// Number of cards in a set.
pub const SET_SIZE: usize = 3;

/// Number of cards in the full deck.
pub const DECK_SIZE: usize = 81;

/// Largest grid that can be dealt from a full deck.
pub const MAX_ROWS: usize = DECK_SIZE / SET_SIZE;

/// Rows dealt when a new game starts.
pub const DEFAULT_ROWS: usize = 3;

/// Configuration for setting up a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rows of `SET_SIZE` cards dealt on the starting board.
    pub rows: usize,

    /// Seed for deck shuffling and dealing.
    /// Same seed produces the same starting board.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the number of starting rows.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the dealing seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
