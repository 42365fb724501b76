//! Core types: errors, RNG, players, game configuration.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DECK_SIZE, DEFAULT_ROWS, MAX_ROWS, SET_SIZE};
pub use error::{Result, SetError};
pub use player::Player;
pub use rng::GameRng;
