//! The interpretation engine.
//!
//! `interpret` is a pure function of its arguments: it performs no I/O,
//! consults no randomness and keeps no state between calls, so it can be
//! called concurrently from any number of callers.
//!
//! ## Resolution
//!
//! Every placement is resolved against the card list and the spread
//! before any text is produced. A single unknown card or position fails
//! the whole call; partial interpretations are never returned.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId};
use crate::core::{InterpretOptions, ReadingError, Result};
use crate::rules::CombinationRule;
use crate::spreads::{Orientation, PlacedCard, Spread, SpreadPosition};

use super::analysis::ReadingAnalysis;
use super::position::{
    adjacency_influence, base_interpretation, compose_long, compose_short, position_modifier,
};
use super::result::{InterpretationResult, PositionInterpretation};

/// A placement with its card and slot looked up.
#[derive(Clone, Copy, Debug)]
struct Resolved<'a> {
    placed: &'a PlacedCard,
    card: &'a Card,
    position: &'a SpreadPosition,
}

/// Interpret a reading.
///
/// `all_cards` is the full card catalog; a lookup by id is built on each
/// call. `rules` is the combination rule catalog. It is accepted so that
/// callers can pass their full rule set, but no rule affects the output.
///
/// ## Example
///
/// ```
/// use tarot_reader::cards::Card;
/// use tarot_reader::core::InterpretOptions;
/// use tarot_reader::interpret::interpret;
/// use tarot_reader::spreads::{PlacedCard, Spread, SpreadPosition};
///
/// let spread = Spread::new("focus", "Focus")
///     .with_position(SpreadPosition::new(0, "Focus", "central theme"));
/// let fool = Card::major("major-0", "The Fool", 0)
///     .with_upright("New beginnings.", "A leap of faith.")
///     .with_reversed("Recklessness.", "Poor judgment.");
///
/// let result = interpret(
///     &spread,
///     &[PlacedCard::upright("major-0", 0)],
///     &[fool],
///     &[],
///     InterpretOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(
///     result.positions[0].interpretation_short,
///     "Focus: The Fool (upright) — New beginnings."
/// );
/// ```
pub fn interpret(
    spread: &Spread,
    placed: &[PlacedCard],
    all_cards: &[Card],
    rules: &[CombinationRule],
    options: InterpretOptions,
) -> Result<InterpretationResult> {
    tracing::debug!(
        spread = %spread.id,
        placed = placed.len(),
        catalog = all_cards.len(),
        rules = rules.len(),
        mode = %options.reversal_mode,
        "interpreting reading"
    );

    let lookup: FxHashMap<&CardId, &Card> = all_cards.iter().map(|c| (&c.id, c)).collect();

    let resolved = match resolve(spread, placed, &lookup) {
        Ok(resolved) => resolved,
        Err(err) => {
            tracing::warn!(spread = %spread.id, error = %err, "reading failed to resolve");
            return Err(err);
        }
    };

    let positions = resolved
        .iter()
        .enumerate()
        .map(|(slot, entry)| interpret_position(slot, entry, &resolved, options))
        .collect();

    let analysis =
        ReadingAnalysis::from_cards(resolved.iter().map(|r| (r.card, r.placed.orientation)));

    Ok(InterpretationResult {
        positions,
        overall_summary: analysis.summary(),
        confidence_hints: analysis.confidence_hints(),
        suggested_actions: analysis.suggested_actions(),
        dominant_suit: analysis.dominant_suit,
        major_arcana_count: analysis.major_arcana_count,
        reversed_count: analysis.reversed_count,
        keywords: analysis.keywords,
    })
}

fn resolve<'a>(
    spread: &'a Spread,
    placed: &'a [PlacedCard],
    lookup: &FxHashMap<&CardId, &'a Card>,
) -> Result<Vec<Resolved<'a>>> {
    placed
        .iter()
        .map(|p| -> Result<Resolved<'a>> {
            let card = lookup
                .get(&p.card_id)
                .copied()
                .ok_or_else(|| ReadingError::CardNotFound(p.card_id.clone()))?;
            let position = spread
                .position(p.position)
                .ok_or(ReadingError::PositionNotFound(p.position))?;
            Ok(Resolved {
                placed: p,
                card,
                position,
            })
        })
        .collect()
}

/// Build the texts for the placement at `slot` in `all`.
fn interpret_position(
    slot: usize,
    entry: &Resolved<'_>,
    all: &[Resolved<'_>],
    options: InterpretOptions,
) -> PositionInterpretation {
    let orientation = entry.placed.orientation;

    let neighbours: Vec<(&Card, Orientation)> = all
        .iter()
        .enumerate()
        .filter(|&(other, r)| other != slot && r.placed.is_adjacent_to(entry.placed))
        .map(|(_, r)| (r.card, r.placed.orientation))
        .collect();

    let base = base_interpretation(entry.card, orientation, options.reversal_mode);
    let modifier = position_modifier(entry.position, orientation);
    let influence = adjacency_influence(entry.card, &neighbours);

    tracing::trace!(
        card = %entry.card.id,
        position = entry.placed.position,
        neighbours = neighbours.len(),
        influenced = !influence.is_empty(),
        "interpreted position"
    );

    PositionInterpretation {
        slot_name: entry.position.name.clone(),
        card_id: entry.card.id.clone(),
        orientation,
        interpretation_short: compose_short(entry.card, entry.position, orientation, &base),
        interpretation_long: compose_long(
            entry.card,
            entry.position,
            orientation,
            &base,
            &modifier,
            &influence,
        ),
    }
}
