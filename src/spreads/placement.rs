//! Cards placed into a spread.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Whether a card is read upright or reversed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Upright,
    Reversed,
}

impl Orientation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Orientation::Upright => "upright",
            Orientation::Reversed => "reversed",
        }
    }

    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Orientation::Reversed)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card placed at a spread position.
///
/// `position` is a `SpreadPosition::index`, not an offset into the
/// spread's position list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedCard {
    pub card_id: CardId,
    pub orientation: Orientation,
    pub position: i32,
}

impl PlacedCard {
    /// Place a card upright.
    pub fn upright(card_id: impl Into<CardId>, position: i32) -> Self {
        Self {
            card_id: card_id.into(),
            orientation: Orientation::Upright,
            position,
        }
    }

    /// Place a card reversed.
    pub fn reversed(card_id: impl Into<CardId>, position: i32) -> Self {
        Self {
            card_id: card_id.into(),
            orientation: Orientation::Reversed,
            position,
        }
    }

    /// Check whether this placement sits within one index of `other`.
    #[must_use]
    pub fn is_adjacent_to(&self, other: &PlacedCard) -> bool {
        (i64::from(self.position) - i64::from(other.position)).abs() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_display() {
        assert_eq!(Orientation::Upright.to_string(), "upright");
        assert_eq!(Orientation::Reversed.to_string(), "reversed");
        assert!(Orientation::Reversed.is_reversed());
        assert!(!Orientation::default().is_reversed());
    }

    #[test]
    fn test_adjacency() {
        let a = PlacedCard::upright("a", 3);
        let b = PlacedCard::reversed("b", 4);
        let c = PlacedCard::upright("c", 6);

        assert!(a.is_adjacent_to(&b));
        assert!(b.is_adjacent_to(&a));
        assert!(!a.is_adjacent_to(&c));
        assert!(a.is_adjacent_to(&a));
    }

    #[test]
    fn test_adjacency_extreme_indices() {
        let a = PlacedCard::upright("a", i32::MIN);
        let b = PlacedCard::upright("b", i32::MAX);
        assert!(!a.is_adjacent_to(&b));
    }

    #[test]
    fn test_placed_card_json() {
        let placed: PlacedCard =
            serde_json::from_str(r#"{"cardId":"major-0","orientation":"reversed","position":2}"#)
                .unwrap();
        assert_eq!(placed, PlacedCard::reversed("major-0", 2));
    }
}
