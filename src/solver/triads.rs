//! Set validity and triad enumeration.
//!
//! A triad is three cards taken from a board in board order. It is a set
//! when the cards are pairwise distinct and, on every axis, the three values
//! add up to a multiple of 3.

use crate::cards::{Attribute, Card};

/// Three cards from a board, in board order.
pub type Triad = [Card; 3];

/// True if the three cards form a valid set.
///
/// All three pairs are checked for distinctness; the sum rule alone accepts
/// three copies of one card.
#[must_use]
pub fn is_valid_set(a: Card, b: Card, c: Card) -> bool {
    if a == b || b == c || a == c {
        return false;
    }
    let (va, vb, vc) = (a.values(), b.values(), c.values());
    (0..Card::PROPERTY_COUNT).all(|axis| (va[axis] + vb[axis] + vc[axis]) % 3 == 0)
}

/// True if the triad is a valid set.
#[inline]
#[must_use]
pub fn is_valid_triad(triad: &Triad) -> bool {
    is_valid_set(triad[0], triad[1], triad[2])
}

/// The card that forms a set with `a` and `b`.
///
/// When `a == b` this returns `a` again, which is never a valid set.
#[must_use]
pub fn complete_set(a: Card, b: Card) -> Card {
    Card::new(
        a.color().third(b.color()),
        a.shape().third(b.shape()),
        a.shading().third(b.shading()),
        a.count().third(b.count()),
    )
}

/// Every combination of three positions `i < j < k`, in lexicographic order.
///
/// No filtering is applied: an `n`-card input yields `C(n, 3)` triads.
#[must_use]
pub fn all_triads(cards: &[Card]) -> Vec<Triad> {
    let n = cards.len();
    let mut result = Vec::with_capacity(triad_count(n));
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                result.push([cards[i], cards[j], cards[k]]);
            }
        }
    }
    result
}

/// The valid sets among `all_triads(cards)`, in the same order.
#[must_use]
pub fn all_sets(cards: &[Card]) -> Vec<Triad> {
    all_triads(cards)
        .into_iter()
        .filter(is_valid_triad)
        .collect()
}

/// Number of valid sets on the board.
#[must_use]
pub fn count_sets(cards: &[Card]) -> usize {
    all_sets(cards).len()
}

/// True if the board holds at least one valid set.
#[must_use]
pub fn has_set(cards: &[Card]) -> bool {
    all_triads(cards).iter().any(is_valid_triad)
}

fn triad_count(n: usize) -> usize {
    if n < 3 {
        0
    } else {
        n * (n - 1) * (n - 2) / 6
    }
}
