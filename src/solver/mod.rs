//! Set solver: validity, triad enumeration, maximum exclusive sets.
//!
//! All functions are pure and read only the card slice they are given. A
//! board that may change underneath should be snapshotted first, e.g. with
//! [`CardSource::all_cards`](crate::grid::CardSource::all_cards).
//!
//! ```
//! use set_solver::cards::Card;
//! use set_solver::solver::{all_sets, is_valid_set, max_exclusive_sets};
//!
//! let board: Vec<Card> = ["0000", "0111", "0222", "1012", "1120", "1201", "2021", "2102", "2210"]
//!     .iter()
//!     .map(|id| id.parse().unwrap())
//!     .collect();
//!
//! assert!(is_valid_set(board[0], board[1], board[2]));
//! assert!(all_sets(&board).len() >= 3);
//! assert_eq!(max_exclusive_sets(&board).len(), 3);
//! ```

pub mod config;
pub mod search;
pub mod stats;
pub mod triads;

pub use config::SolverConfig;
pub use search::{max_exclusive_sets, MaxExclusiveSearch};
pub use stats::SolveStats;
pub use triads::{
    all_sets, all_triads, complete_set, count_sets, has_set, is_valid_set, is_valid_triad, Triad,
};
