//! The `Card` value type.
//!
//! Cards are plain values: two cards built from the same four attributes are
//! equal and hash identically. There is no card cache.
//!
//! ## Identifier
//!
//! A card is written as four digits, one per axis in the order color, shape,
//! shading, count. `"0120"` is a red squiggle, open, one symbol.
//!
//! ```
//! use set_solver::cards::{Card, Color, Count, Shading, Shape};
//!
//! let card: Card = "0120".parse().unwrap();
//! assert_eq!(card, Card::new(Color::Red, Shape::Squiggle, Shading::Open, Count::One));
//! assert_eq!(card.to_string(), "0120");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Count, Shading, Shape};
use crate::core::{Result, SetError, DECK_SIZE};

/// A Set card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    color: Color,
    shape: Shape,
    shading: Shading,
    count: Count,
}

impl Card {
    /// Number of attribute axes.
    pub const PROPERTY_COUNT: usize = 4;

    /// Create a card from its attributes.
    #[must_use]
    pub const fn new(color: Color, shape: Shape, shading: Shading, count: Count) -> Self {
        Self {
            color,
            shape,
            shading,
            count,
        }
    }

    /// Parse a four-digit identifier.
    pub fn parse(id: &str) -> Result<Self> {
        let invalid = || SetError::InvalidCardId(id.to_string());

        let bytes = id.as_bytes();
        if bytes.len() != Self::PROPERTY_COUNT {
            return Err(invalid());
        }

        let mut values = [0u8; Self::PROPERTY_COUNT];
        for (slot, &byte) in values.iter_mut().zip(bytes) {
            *slot = match byte {
                b'0'..=b'2' => byte - b'0',
                _ => return Err(invalid()),
            };
        }

        Self::from_values(values).ok_or_else(invalid)
    }

    /// Create a card from the numeric value of each axis.
    ///
    /// Returns `None` if any value is outside `0..3`.
    #[must_use]
    pub fn from_values(values: [u8; 4]) -> Option<Self> {
        Some(Self::new(
            Color::from_value(values[0])?,
            Shape::from_value(values[1])?,
            Shading::from_value(values[2])?,
            Count::from_value(values[3])?,
        ))
    }

    /// Numeric value of each axis, in identifier order.
    #[must_use]
    pub fn values(self) -> [u8; 4] {
        [
            self.color.value(),
            self.shape.value(),
            self.shading.value(),
            self.count.value(),
        ]
    }

    /// Position of the card in the full deck, in `0..81`.
    ///
    /// The four values are read as a base-3 number, color first.
    #[must_use]
    pub fn index(self) -> usize {
        self.values()
            .iter()
            .fold(0usize, |acc, &v| acc * 3 + v as usize)
    }

    /// Inverse of [`Card::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        let mut rem = index;
        let mut values = [0u8; 4];
        for slot in values.iter_mut().rev() {
            *slot = (rem % 3) as u8;
            rem /= 3;
        }
        Self::from_values(values)
    }

    /// All 81 cards, ordered by color, then shape, then shading, then count.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE).filter_map(Card::from_index)
    }

    /// The four-digit identifier.
    #[must_use]
    pub fn id(self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn color(self) -> Color {
        self.color
    }

    #[must_use]
    pub fn shape(self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn shading(self) -> Shading {
        self.shading
    }

    #[must_use]
    pub fn count(self) -> Count {
        self.count
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.values();
        write!(f, "{}{}{}{}", a, b, c, d)
    }
}

impl FromStr for Card {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self> {
        Card::parse(s)
    }
}

impl TryFrom<String> for Card {
    type Error = SetError;

    fn try_from(s: String) -> Result<Self> {
        Card::parse(&s)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.id()
    }
}
