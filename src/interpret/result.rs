//! Interpretation output records.
//!
//! Field names serialize in camelCase; this shape is what API callers
//! return to clients verbatim.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Suit};
use crate::spreads::Orientation;

/// Interpretation of one placed card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionInterpretation {
    /// Name of the spread position the card occupies.
    pub slot_name: String,
    pub card_id: CardId,
    pub orientation: Orientation,
    /// One-line reading: `"{slot}: {card} ({orientation}) — {meaning}"`.
    pub interpretation_short: String,
    /// Full reading including position and neighbour notes.
    pub interpretation_long: String,
}

/// Complete interpretation of a reading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationResult {
    /// One entry per placed card, in input order.
    pub positions: Vec<PositionInterpretation>,
    pub overall_summary: String,
    /// Up to five most frequent keywords.
    pub keywords: Vec<String>,
    pub confidence_hints: Vec<String>,
    /// At most three suggestions.
    pub suggested_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_suit: Option<Suit>,
    pub major_arcana_count: usize,
    pub reversed_count: usize,
}
