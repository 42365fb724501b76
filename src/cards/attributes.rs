//! The four attribute axes of a Set card.
//!
//! Each axis has exactly three values, numbered 0, 1, 2. Three values on one
//! axis are "all same or all different" exactly when their sum is a multiple
//! of 3, which is what the solver relies on.
//!
//! | Axis    | 0       | 1        | 2      |
//! |---------|---------|----------|--------|
//! | Color   | Red     | Green    | Purple |
//! | Shape   | Diamond | Squiggle | Oval   |
//! | Shading | Solid   | Striped  | Open   |
//! | Count   | One     | Two      | Three  |

use serde::{Deserialize, Serialize};

/// Common behaviour of the attribute enums.
pub trait Attribute: Copy + Eq + Sized {
    /// All values of the axis, in numeric order.
    const ALL: [Self; 3];

    /// Numeric value in `0..3`.
    fn value(self) -> u8;

    /// Attribute with the given numeric value, if in range.
    fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// The value that completes a set on this axis with `self` and `other`.
    ///
    /// Equal inputs yield the same value, distinct inputs yield the remaining one.
    fn third(self, other: Self) -> Self {
        let sum = self.value() + other.value();
        Self::ALL[((3 - sum % 3) % 3) as usize]
    }
}

macro_rules! attribute_enum {
    ($(#[$meta:meta])* $name:ident { $zero:ident, $one:ident, $two:ident }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $zero = 0,
            $one = 1,
            $two = 2,
        }

        impl Attribute for $name {
            const ALL: [Self; 3] = [$name::$zero, $name::$one, $name::$two];

            fn value(self) -> u8 {
                self as u8
            }
        }
    };
}

attribute_enum! {
    /// Symbol color.
    Color { Red, Green, Purple }
}

attribute_enum! {
    /// Symbol shape.
    Shape { Diamond, Squiggle, Oval }
}

attribute_enum! {
    /// Symbol fill.
    Shading { Solid, Striped, Open }
}

attribute_enum! {
    /// Number of symbols on the card.
    Count { One, Two, Three }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_follow_declaration_order() {
        assert_eq!(Color::Red.value(), 0);
        assert_eq!(Color::Purple.value(), 2);
        assert_eq!(Shape::Squiggle.value(), 1);
        assert_eq!(Shading::Open.value(), 2);
        assert_eq!(Count::One.value(), 0);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Shape::from_value(2), Some(Shape::Oval));
        assert_eq!(Count::from_value(1), Some(Count::Two));
        assert_eq!(Color::from_value(3), None);
    }

    #[test]
    fn test_third() {
        assert_eq!(Color::Red.third(Color::Red), Color::Red);
        assert_eq!(Color::Red.third(Color::Green), Color::Purple);
        assert_eq!(Shading::Striped.third(Shading::Open), Shading::Solid);
        assert_eq!(Count::Three.third(Count::One), Count::Two);

        for a in Shape::ALL {
            for b in Shape::ALL {
                let c = a.third(b);
                assert_eq!((a.value() + b.value() + c.value()) % 3, 0);
            }
        }
    }
}
