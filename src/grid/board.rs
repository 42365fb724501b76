//! The grid of face-up cards.
//!
//! A `SetGrid` is an insertion-ordered set of cards. Order matters only for
//! reproducibility: the solver enumerates triads in board order, so the same
//! board yields the same answer.

use rustc_hash::FxHashSet;

use crate::cards::Card;
use crate::core::{GameRng, Result, SetError, MAX_ROWS, SET_SIZE};
use crate::solver::is_valid_set;

/// Supplies a snapshot of cards to the solver.
pub trait CardSource {
    /// Current cards, unordered in meaning, without duplicates.
    fn all_cards(&self) -> Vec<Card>;
}

/// Cards currently in play.
///
/// ## Usage
///
/// ```
/// use set_solver::cards::Card;
/// use set_solver::grid::SetGrid;
///
/// let c = |id: &str| -> Card { id.parse().unwrap() };
///
/// let mut grid = SetGrid::new();
/// grid.add_cards(c("0000"), c("1111"), c("2222"))
///     .add_cards(c("0001"), c("0002"), c("0000"));
/// assert_eq!(grid.len(), 5);
///
/// assert!(grid.remove_set(c("0000"), c("1111"), c("2222")));
/// assert_eq!(grid.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SetGrid {
    /// Cards in the order they were added.
    order: Vec<Card>,

    /// Membership index over `order`.
    members: FxHashSet<Card>,
}

impl SetGrid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal `rows` rows of `SET_SIZE` cards drawn at random from `deck`.
    ///
    /// Drawn cards are removed from `deck`.
    ///
    /// # Errors
    ///
    /// - `GridSizeExceeded` if `rows > MAX_ROWS`
    /// - `InsufficientDeck` if the deck holds fewer than `rows * SET_SIZE` cards
    pub fn random(rows: usize, deck: &mut Vec<Card>, rng: &mut GameRng) -> Result<Self> {
        if rows > MAX_ROWS {
            return Err(SetError::GridSizeExceeded { rows });
        }

        let needed = rows * SET_SIZE;
        if needed > deck.len() {
            return Err(SetError::InsufficientDeck {
                needed,
                available: deck.len(),
            });
        }

        let mut grid = SetGrid::new();
        for _ in 0..rows {
            let [a, b, c]: [Card; SET_SIZE] = std::array::from_fn(|_| {
                let index = rng.gen_range_usize(0..deck.len());
                deck.remove(index)
            });
            grid.add_cards(a, b, c);
        }

        Ok(grid)
    }

    /// Create a grid holding the given cards, dropping duplicates.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut grid = SetGrid::new();
        for card in cards {
            grid.insert(card);
        }
        grid
    }

    /// Add three cards. Cards already on the grid are ignored.
    pub fn add_cards(&mut self, a: Card, b: Card, c: Card) -> &mut Self {
        self.insert(a);
        self.insert(b);
        self.insert(c);
        self
    }

    fn insert(&mut self, card: Card) -> bool {
        if !self.members.insert(card) {
            return false;
        }
        self.order.push(card);
        true
    }

    /// Remove three cards if they form a valid set and are all on the grid.
    ///
    /// Returns whether the cards were removed. Nothing changes otherwise.
    pub fn remove_set(&mut self, a: Card, b: Card, c: Card) -> bool {
        let removable = is_valid_set(a, b, c)
            && self.contains(a)
            && self.contains(b)
            && self.contains(c);
        if !removable {
            return false;
        }

        for card in [a, b, c] {
            self.members.remove(&card);
        }
        self.order.retain(|card| *card != a && *card != b && *card != c);
        true
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.members.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.order.iter().copied()
    }

    /// Borrow the cards in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.order
    }
}

impl CardSource for SetGrid {
    fn all_cards(&self) -> Vec<Card> {
        self.order.clone()
    }
}

impl PartialEq for SetGrid {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for SetGrid {}
