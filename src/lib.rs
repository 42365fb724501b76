//! # set-solver
//!
//! Card model and exact solver for the card game Set.
//!
//! ## The Game
//!
//! The deck has 81 cards, one for every combination of four attributes
//! (color, shape, shading, count), each taking one of three values. Three
//! cards form a *set* when, on every attribute, they are all the same or all
//! different.
//!
//! ## Architecture
//!
//! - **Value cards**: `Card` is a `Copy` value with derived equality and
//!   hashing. No canonicalization table, no global state.
//!
//! - **Pure solver**: every solver function reads a card slice and returns
//!   fresh results. Boards are snapshotted through `CardSource` first.
//!
//! - **Exact packing search**: `MaxExclusiveSearch` finds a maximum set of
//!   pairwise card-disjoint sets by depth-first include/skip search over
//!   128-bit card masks, with upper-bound pruning and an optional node budget.
//!
//! ## Modules
//!
//! - `core`: errors, RNG, players, constants and configuration
//! - `cards`: attributes, `Card`, the full deck, `CardMask`
//! - `grid`: `SetGrid` board and the `CardSource` trait
//! - `solver`: validity, triad enumeration, maximum exclusive sets
//! - `game`: `SetGame` setup around a board

pub mod core;
pub mod cards;
pub mod grid;
pub mod solver;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, Player, Result, SetError,
    DECK_SIZE, MAX_ROWS, SET_SIZE,
};

pub use crate::cards::{Attribute, Card, CardMask, Color, Count, Shading, Shape, full_deck};

pub use crate::grid::{CardSource, SetGrid};

pub use crate::solver::{
    all_sets, all_triads, complete_set, is_valid_set, max_exclusive_sets,
    MaxExclusiveSearch, SolveStats, SolverConfig, Triad,
};

pub use crate::game::SetGame;
