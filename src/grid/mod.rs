//! The board: cards in play and the `CardSource` seam the solver reads from.

pub mod board;

pub use board::{CardSource, SetGrid};
