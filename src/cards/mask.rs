//! A set of cards packed into a `u128`, one bit per deck index.
//!
//! Used by the solver to track cards already claimed by a packing, where
//! copying the set on every branch has to be free.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Bitset of cards keyed by [`Card::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardMask(u128);

impl CardMask {
    /// The empty set.
    pub const EMPTY: CardMask = CardMask(0);

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    fn bit(card: Card) -> u128 {
        1u128 << card.index()
    }

    #[inline]
    pub fn insert(&mut self, card: Card) {
        self.0 |= Self::bit(card);
    }

    #[inline]
    #[must_use]
    pub fn contains(self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    /// Copy of this set with `cards` added.
    #[inline]
    #[must_use]
    pub fn with(self, cards: &[Card]) -> Self {
        cards.iter().fold(self, |mut mask, &card| {
            mask.insert(card);
            mask
        })
    }

    #[inline]
    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if the two sets share a card.
    #[inline]
    #[must_use]
    pub fn intersects(self, other: CardMask) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub fn union(self, other: CardMask) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub fn difference(self, other: CardMask) -> Self {
        Self(self.0 & !other.0)
    }

    /// Cards in deck-index order.
    pub fn iter(self) -> impl Iterator<Item = Card> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Card::from_index(index)
        })
    }
}

impl FromIterator<Card> for CardMask {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut mask = CardMask::new();
        for card in iter {
            mask.insert(card);
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> Card {
        Card::parse(id).unwrap()
    }

    #[test]
    fn test_insert_contains() {
        let mut mask = CardMask::new();
        assert!(mask.is_empty());

        mask.insert(card("2222"));
        mask.insert(card("0000"));
        mask.insert(card("0000"));
        assert_eq!(mask.len(), 2);
        assert!(mask.contains(card("2222")));
        assert!(!mask.contains(card("1111")));
    }

    #[test]
    fn test_set_operations() {
        let a: CardMask = ["0000", "0111", "0222"].iter().map(|id| card(id)).collect();
        let b: CardMask = ["0222", "1012"].iter().map(|id| card(id)).collect();

        assert!(a.intersects(b));
        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.difference(b).len(), 2);
        assert!(!a.difference(b).intersects(b));
    }

    #[test]
    fn test_with_does_not_mutate() {
        let base = CardMask::new();
        let grown = base.with(&[card("0000"), card("1111")]);
        assert!(base.is_empty());
        assert_eq!(grown.len(), 2);
    }

    #[test]
    fn test_iter_in_index_order() {
        let full: CardMask = Card::all().collect();
        assert_eq!(full.len(), 81);
        let cards: Vec<_> = full.iter().collect();
        assert_eq!(cards, Card::all().collect::<Vec<_>>());

        let mask: CardMask = [card("2000"), card("0001")].into_iter().collect();
        let ids: Vec<_> = mask.iter().map(Card::id).collect();
        assert_eq!(ids, vec!["0001", "2000"]);
    }
}
