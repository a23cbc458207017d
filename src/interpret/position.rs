//! Per-position text generation.
//!
//! Each placed card gets a base meaning (from its orientation and the
//! reversal mode), a sentence tying it to its slot, and optional notes
//! about the cards in neighbouring slots.

use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::core::ReversalMode;
use crate::spreads::{Orientation, SpreadPosition};

/// Appended to reversed short texts in soft mode.
pub const SOFT_REVERSAL_SUFFIX: &str = " (blocked or internal)";

const MAJOR_CLUSTER_NOTE: &str =
    "Multiple Major Arcana nearby indicate significant life themes and spiritual lessons.";

const REVERSED_CLUSTER_NOTE: &str =
    "Surrounded by reversed cards suggests internal work or blocked energies.";

/// Neighbours needed before a cluster note is emitted.
const CLUSTER_THRESHOLD: usize = 2;

/// Short and long meaning before position context is added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseInterpretation {
    pub short: String,
    pub long: String,
}

/// Pick the meaning texts for a card in the given orientation.
#[must_use]
pub fn base_interpretation(
    card: &Card,
    orientation: Orientation,
    mode: ReversalMode,
) -> BaseInterpretation {
    match (orientation, mode) {
        (Orientation::Upright, _) => BaseInterpretation {
            short: card.upright_short.clone(),
            long: card.upright_long.clone(),
        },
        (Orientation::Reversed, ReversalMode::Strong) => BaseInterpretation {
            short: card.reversed_short.clone(),
            long: card.reversed_long.clone(),
        },
        (Orientation::Reversed, ReversalMode::Soft) => BaseInterpretation {
            short: format!("{}{}", card.reversed_short, SOFT_REVERSAL_SUFFIX),
            long: format!(
                "{} The energy of {} is present but may be blocked, internalized, or manifesting in a subtle way.",
                card.reversed_long, card.name
            ),
        },
    }
}

/// Sentence relating the card's energy to its slot.
#[must_use]
pub fn position_modifier(position: &SpreadPosition, orientation: Orientation) -> String {
    let energy = match orientation {
        Orientation::Reversed => "internal or blocked",
        Orientation::Upright => "manifesting externally",
    };
    format!(
        "As {}, this energy is {} and suggests {}.",
        position.name.to_lowercase(),
        energy,
        position.role_hint.to_lowercase()
    )
}

/// Notes about neighbouring cards, space-joined. Empty when nothing applies.
///
/// `neighbours` are the cards in adjacent slots, excluding `card` itself.
#[must_use]
pub fn adjacency_influence(card: &Card, neighbours: &[(&Card, Orientation)]) -> String {
    let mut notes: SmallVec<[String; 3]> = SmallVec::new();

    if let Some(suit) = card.suit {
        let same_suit = neighbours
            .iter()
            .filter(|(n, _)| n.suit == Some(suit))
            .count();
        if same_suit >= CLUSTER_THRESHOLD {
            notes.push(suit_cluster_note(suit));
        }
    }

    let majors = neighbours.iter().filter(|(n, _)| n.is_major()).count();
    if majors >= CLUSTER_THRESHOLD {
        notes.push(MAJOR_CLUSTER_NOTE.to_string());
    }

    let reversed = neighbours.iter().filter(|(_, o)| o.is_reversed()).count();
    if reversed >= CLUSTER_THRESHOLD {
        notes.push(REVERSED_CLUSTER_NOTE.to_string());
    }

    notes.join(" ")
}

fn suit_cluster_note(suit: Suit) -> String {
    format!("Strong {} influence emphasizes {}.", suit, suit.theme())
}

/// `"{slot}: {card} ({orientation}) — {short}"`
#[must_use]
pub fn compose_short(
    card: &Card,
    position: &SpreadPosition,
    orientation: Orientation,
    base: &BaseInterpretation,
) -> String {
    format!(
        "{}: {} ({}) — {}",
        position.name, card.name, orientation, base.short
    )
}

/// `"{card} in {slot} ({orientation}) — {long}"` followed by the modifier
/// and any neighbour notes.
#[must_use]
pub fn compose_long(
    card: &Card,
    position: &SpreadPosition,
    orientation: Orientation,
    base: &BaseInterpretation,
    modifier: &str,
    influence: &str,
) -> String {
    let mut text = format!(
        "{} in {} ({}) — {}",
        card.name, position.name, orientation, base.long
    );
    for extra in [modifier, influence] {
        if !extra.is_empty() {
            text.push(' ');
            text.push_str(extra);
        }
    }
    text
}
