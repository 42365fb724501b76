//! Card system: attributes, the card value type, the deck.
//!
//! ## Key Types
//!
//! - `Color`, `Shape`, `Shading`, `Count`: the three-valued attribute axes
//! - `Card`: immutable value identified by its four attributes
//! - `CardMask`: bitset of cards keyed by deck index
//!
//! `full_deck()` yields the 81 distinct cards.

pub mod attributes;
pub mod card;
pub mod deck;
pub mod mask;

pub use attributes::{Attribute, Color, Count, Shading, Shape};
pub use card::Card;
pub use deck::{deck_without, full_deck};
pub use mask::CardMask;
