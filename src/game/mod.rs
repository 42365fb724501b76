//! Game setup around the solver: players, deck, and board.

pub mod set_game;

pub use set_game::SetGame;
