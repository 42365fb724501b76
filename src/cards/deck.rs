//! The full 81-card deck.

use super::card::Card;

/// Every card exactly once, ordered by color, shape, shading, count.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    Card::all().collect()
}

/// The full deck minus the given cards, preserving deck order.
#[must_use]
pub fn deck_without(cards: &[Card]) -> Vec<Card> {
    Card::all().filter(|card| !cards.contains(card)).collect()
}
