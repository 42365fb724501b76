//! Error type shared by the card, grid, and solver layers.
//!
//! Errors are raised at the parsing and grid boundaries. The solver itself
//! only fails when a configured search budget runs out.

use std::fmt;

/// Errors produced by set-solver operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetError {
    /// A card identifier was not exactly four characters from `0`, `1`, `2`.
    InvalidCardId(String),

    /// The deck does not hold enough cards for the requested grid.
    InsufficientDeck {
        /// Cards required by the grid.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },

    /// A grid was requested with more rows than the deck can ever fill.
    GridSizeExceeded {
        /// Requested row count.
        rows: usize,
    },

    /// The maximum-exclusive-sets search visited more nodes than allowed.
    SearchBudgetExceeded {
        /// Nodes visited before the search gave up.
        nodes: u64,
    },
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetError::InvalidCardId(id) => write!(f, "invalid card id {:?}", id),
            SetError::InsufficientDeck { needed, available } => write!(
                f,
                "the deck does not contain enough cards: need {}, have {}",
                needed, available
            ),
            SetError::GridSizeExceeded { rows } => write!(
                f,
                "a grid cannot have more than {} rows (requested {})",
                super::config::MAX_ROWS,
                rows
            ),
            SetError::SearchBudgetExceeded { nodes } => {
                write!(f, "search budget exhausted after {} nodes", nodes)
            }
        }
    }
}

impl std::error::Error for SetError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SetError::InvalidCardId("0003".to_string());
        assert_eq!(err.to_string(), "invalid card id \"0003\"");

        let err = SetError::InsufficientDeck { needed: 9, available: 4 };
        assert_eq!(err.to_string(), "the deck does not contain enough cards: need 9, have 4");

        let err = SetError::GridSizeExceeded { rows: 28 };
        assert_eq!(err.to_string(), "a grid cannot have more than 27 rows (requested 28)");

        let err = SetError::SearchBudgetExceeded { nodes: 10 };
        assert_eq!(err.to_string(), "search budget exhausted after 10 nodes");
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&SetError::GridSizeExceeded { rows: 30 });
    }
}
