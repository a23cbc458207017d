//! Card definitions - static card data.
//!
//! A `Card` holds everything the engine needs to read it: arcana, suit,
//! keywords and the four meaning texts. Cards are created by whatever
//! manages the catalog and are read-only to the engine.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card, e.g. `"major-0"` or `"cups-12"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Major (22 trump cards) or Minor (56 suited cards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    Major,
    Minor,
}

impl Arcana {
    /// Valid `number` range for this arcana.
    #[must_use]
    pub const fn number_range(self) -> std::ops::RangeInclusive<u8> {
        match self {
            Arcana::Major => 0..=21,
            Arcana::Minor => 1..=14,
        }
    }
}

/// The four Minor Arcana suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

/// Theme used when no suit applies.
pub const SPIRITUAL_THEME: &str = "spiritual and life path themes";

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// Lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Wands => "wands",
            Suit::Cups => "cups",
            Suit::Swords => "swords",
            Suit::Pentacles => "pentacles",
        }
    }

    /// The life area this suit speaks to.
    #[must_use]
    pub const fn theme(self) -> &'static str {
        match self {
            Suit::Wands => "passion, creativity, and spiritual growth",
            Suit::Cups => "emotions, relationships, and intuition",
            Suit::Swords => "thoughts, communication, and challenges",
            Suit::Pentacles => "material matters, work, and practical concerns",
        }
    }

    /// Theme for an optional suit, falling back to the spiritual theme.
    #[must_use]
    pub fn theme_of(suit: Option<Suit>) -> &'static str {
        suit.map_or(SPIRITUAL_THEME, Suit::theme)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use tarot_reader::cards::{Arcana, Card};
///
/// let fool = Card::major("major-0", "The Fool", 0)
///     .with_keywords(["beginnings", "innocence"])
///     .with_upright("New beginnings.", "A leap of faith.")
///     .with_reversed("Recklessness.", "Poor judgment.");
///
/// assert_eq!(fool.arcana, Arcana::Major);
/// assert!(fool.suit.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Major or Minor.
    pub arcana: Arcana,

    /// Suit, present iff the card is Minor Arcana.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,

    /// Sequence number (0-21 Major, 1-14 Minor).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,

    /// Keywords, in catalog order.
    #[serde(default)]
    pub keywords: Vec<String>,

    pub upright_short: String,
    pub upright_long: String,
    pub reversed_short: String,
    pub reversed_long: String,
}

impl Card {
    /// Create a Major Arcana card with empty meanings.
    #[must_use]
    pub fn major(id: impl Into<CardId>, name: impl Into<String>, number: u8) -> Self {
        Self::blank(id.into(), name.into(), Arcana::Major, None, Some(number))
    }

    /// Create a Minor Arcana card with empty meanings.
    #[must_use]
    pub fn minor(id: impl Into<CardId>, name: impl Into<String>, suit: Suit, number: u8) -> Self {
        Self::blank(id.into(), name.into(), Arcana::Minor, Some(suit), Some(number))
    }

    fn blank(
        id: CardId,
        name: String,
        arcana: Arcana,
        suit: Option<Suit>,
        number: Option<u8>,
    ) -> Self {
        Self {
            id,
            name,
            arcana,
            suit,
            number,
            keywords: Vec::new(),
            upright_short: String::new(),
            upright_long: String::new(),
            reversed_short: String::new(),
            reversed_long: String::new(),
        }
    }

    /// Set keywords (builder pattern).
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set upright meanings.
    #[must_use]
    pub fn with_upright(mut self, short: impl Into<String>, long: impl Into<String>) -> Self {
        self.upright_short = short.into();
        self.upright_long = long.into();
        self
    }

    /// Set reversed meanings.
    #[must_use]
    pub fn with_reversed(mut self, short: impl Into<String>, long: impl Into<String>) -> Self {
        self.reversed_short = short.into();
        self.reversed_long = long.into();
        self
    }

    #[must_use]
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("major-0");
        assert_eq!(id.as_str(), "major-0");
        assert_eq!(format!("{}", id), "major-0");
        assert_eq!(CardId::from("major-0"), id);
    }

    #[test]
    fn test_suit_themes() {
        assert_eq!(Suit::Wands.theme(), "passion, creativity, and spiritual growth");
        assert_eq!(Suit::Cups.theme(), "emotions, relationships, and intuition");
        assert_eq!(Suit::Swords.theme(), "thoughts, communication, and challenges");
        assert_eq!(
            Suit::Pentacles.theme(),
            "material matters, work, and practical concerns"
        );
        assert_eq!(Suit::theme_of(None), "spiritual and life path themes");
    }

    #[test]
    fn test_card_builder() {
        let card = Card::minor("cups-2", "Two of Cups", Suit::Cups, 2)
            .with_keywords(["partnership", "union"])
            .with_upright("Union.", "A meaningful bond forms.")
            .with_reversed("Imbalance.", "A relationship is strained.");

        assert_eq!(card.arcana, Arcana::Minor);
        assert_eq!(card.suit, Some(Suit::Cups));
        assert_eq!(card.number, Some(2));
        assert_eq!(card.keywords, vec!["partnership", "union"]);
        assert!(!card.is_major());
    }

    #[test]
    fn test_arcana_number_range() {
        assert!(Arcana::Major.number_range().contains(&0));
        assert!(Arcana::Major.number_range().contains(&21));
        assert!(!Arcana::Minor.number_range().contains(&0));
        assert!(Arcana::Minor.number_range().contains(&14));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::major("major-0", "The Fool", 0)
            .with_upright("New beginnings.", "A leap of faith.");

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["id"], "major-0");
        assert_eq!(json["arcana"], "Major");
        assert_eq!(json["uprightShort"], "New beginnings.");
        assert!(json.get("suit").is_none());

        let minor = Card::minor("wands-1", "Ace of Wands", Suit::Wands, 1);
        let json = serde_json::to_value(&minor).unwrap();
        assert_eq!(json["suit"], "wands");

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, minor);
    }
}
