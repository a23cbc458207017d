//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores the full deck. It provides O(1) lookup by
//! `CardId` and iterates in insertion order so that shuffling a catalog
//! with a fixed random source is reproducible.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, Suit};
use crate::core::{ReadingError, Result};

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use tarot_reader::cards::{Card, CardCatalog, CardId};
///
/// let catalog = CardCatalog::from_cards([
///     Card::major("major-0", "The Fool", 0),
///     Card::major("major-1", "The Magician", 1),
/// ])
/// .unwrap();
///
/// let found = catalog.get(&CardId::new("major-1")).unwrap();
/// assert_eq!(found.name, "The Magician");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.insert(card)?;
        }
        Ok(catalog)
    }

    /// Build a catalog from a JSON array of cards.
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        let catalog = Self::from_cards(cards)?;
        tracing::debug!(cards = catalog.len(), "loaded card catalog");
        Ok(catalog)
    }

    /// Add a card definition.
    pub fn insert(&mut self, card: Card) -> Result<()> {
        if self.index.contains_key(&card.id) {
            return Err(ReadingError::DuplicateCard(card.id));
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Get a card definition by ID, failing with `CardNotFound`.
    pub fn resolve(&self, id: &CardId) -> Result<&Card> {
        self.get(id)
            .ok_or_else(|| ReadingError::CardNotFound(id.clone()))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over all cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards of one suit.
    pub fn by_suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.suit == Some(suit))
    }

    /// Major Arcana cards.
    pub fn major_arcana(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_major())
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}

impl<'a> IntoIterator for &'a CardCatalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
