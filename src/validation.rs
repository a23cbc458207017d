//! Caller-side validation of catalogs, spreads and placements.
//!
//! The engine only fails on references it cannot resolve. Everything
//! else it tolerates (duplicate positions, gaps in numbering, a card
//! placed twice). Callers that want to reject such input up front use
//! these checks, which report every issue found instead of stopping at
//! the first.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Arcana, Card, CardCatalog, CardId};
use crate::spreads::{PlacedCard, Spread};

/// Problems with a single card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardIssue {
    /// Minor Arcana card without a suit.
    MissingSuit,
    /// Major Arcana card with a suit.
    UnexpectedSuit,
    /// No sequence number.
    MissingNumber,
    /// Number outside the range for the card's arcana.
    NumberOutOfRange { number: u8 },
    /// A meaning text is empty.
    EmptyText { field: String },
}

/// Problems with a spread definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpreadIssue {
    /// The spread has no positions.
    Empty,
    /// Two positions share an index.
    DuplicateIndex { index: i32 },
    /// Index numbering skips the inclusive range `from..=to`.
    Gap { from: i32, to: i32 },
}

/// Problems with a set of placements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementIssue {
    UnknownCard { card_id: CardId },
    UnknownPosition { position: i32 },
    DuplicateCard { card_id: CardId },
    DuplicatePosition { position: i32 },
}

/// Check a card's classification and texts.
#[must_use]
pub fn validate_card(card: &Card) -> Vec<CardIssue> {
    let mut issues = Vec::new();

    match (card.arcana, card.suit) {
        (Arcana::Minor, None) => issues.push(CardIssue::MissingSuit),
        (Arcana::Major, Some(_)) => issues.push(CardIssue::UnexpectedSuit),
        _ => {}
    }

    match card.number {
        None => issues.push(CardIssue::MissingNumber),
        Some(number) if !card.arcana.number_range().contains(&number) => {
            issues.push(CardIssue::NumberOutOfRange { number });
        }
        Some(_) => {}
    }

    let texts = [
        ("uprightShort", &card.upright_short),
        ("uprightLong", &card.upright_long),
        ("reversedShort", &card.reversed_short),
        ("reversedLong", &card.reversed_long),
    ];
    for (field, text) in texts {
        if text.trim().is_empty() {
            issues.push(CardIssue::EmptyText {
                field: field.to_string(),
            });
        }
    }

    issues
}

/// Check every card in a catalog, returning only cards with issues.
#[must_use]
pub fn validate_catalog(catalog: &CardCatalog) -> Vec<(CardId, Vec<CardIssue>)> {
    catalog
        .iter()
        .filter_map(|card| {
            let issues = validate_card(card);
            (!issues.is_empty()).then(|| (card.id.clone(), issues))
        })
        .collect()
}

/// Check a spread's position numbering.
#[must_use]
pub fn validate_spread(spread: &Spread) -> Vec<SpreadIssue> {
    if spread.is_empty() {
        return vec![SpreadIssue::Empty];
    }

    let mut issues = Vec::new();
    let mut seen = FxHashSet::default();
    for position in &spread.positions {
        if !seen.insert(position.index) {
            issues.push(SpreadIssue::DuplicateIndex {
                index: position.index,
            });
        }
    }

    let mut indices: Vec<i32> = seen.into_iter().collect();
    indices.sort_unstable();
    for pair in indices.windows(2) {
        if i64::from(pair[1]) - i64::from(pair[0]) > 1 {
            issues.push(SpreadIssue::Gap {
                from: pair[0] + 1,
                to: pair[1] - 1,
            });
        }
    }

    issues
}

/// Check placements against a spread and catalog.
#[must_use]
pub fn validate_placements(
    spread: &Spread,
    placed: &[PlacedCard],
    catalog: &CardCatalog,
) -> Vec<PlacementIssue> {
    let mut issues = Vec::new();
    let mut cards_seen = FxHashSet::default();
    let mut positions_seen = FxHashSet::default();

    for p in placed {
        if !catalog.contains(&p.card_id) {
            issues.push(PlacementIssue::UnknownCard {
                card_id: p.card_id.clone(),
            });
        }
        if spread.position(p.position).is_none() {
            issues.push(PlacementIssue::UnknownPosition {
                position: p.position,
            });
        }
        if !cards_seen.insert(&p.card_id) {
            issues.push(PlacementIssue::DuplicateCard {
                card_id: p.card_id.clone(),
            });
        }
        if !positions_seen.insert(p.position) {
            issues.push(PlacementIssue::DuplicatePosition {
                position: p.position,
            });
        }
    }

    if !issues.is_empty() {
        tracing::debug!(spread = %spread.id, issues = issues.len(), "placements failed validation");
    }

    issues
}
