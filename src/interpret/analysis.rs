//! Whole-reading analysis: tallies, summary, hints and suggested actions.
//!
//! All rankings break ties by first appearance in placement order, never
//! alphabetically, so the output is stable for a given input order.

use rustc_hash::FxHashMap;

use crate::cards::{Card, Suit};
use crate::spreads::Orientation;

/// Number of keywords kept in the result.
pub const TOP_KEYWORDS: usize = 5;

/// Maximum number of suggested actions.
pub const MAX_ACTIONS: usize = 3;

/// Always closes the overall summary.
pub const CLOSING_SENTENCE: &str =
    "Trust your intuition as you interpret these messages for your path forward.";

/// Aggregate counts over a set of resolved placements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadingAnalysis {
    /// Number of placed cards.
    pub total: usize,
    pub major_arcana_count: usize,
    pub reversed_count: usize,
    /// Most common suit, if any suited card was drawn.
    pub dominant_suit: Option<Suit>,
    /// Most frequent keywords, at most `TOP_KEYWORDS`.
    pub keywords: Vec<String>,
}

impl ReadingAnalysis {
    /// Tally the resolved cards of a reading, in placement order.
    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = (&'a Card, Orientation)>,
    {
        let mut analysis = Self::default();
        let mut suits: Vec<(Suit, usize)> = Vec::with_capacity(Suit::ALL.len());
        let mut keyword_counts: Vec<(&'a str, usize)> = Vec::new();
        let mut keyword_slots: FxHashMap<&'a str, usize> = FxHashMap::default();

        for (card, orientation) in cards {
            analysis.total += 1;
            if card.is_major() {
                analysis.major_arcana_count += 1;
            }
            if orientation.is_reversed() {
                analysis.reversed_count += 1;
            }

            if let Some(suit) = card.suit {
                match suits.iter_mut().find(|(s, _)| *s == suit) {
                    Some((_, count)) => *count += 1,
                    None => suits.push((suit, 1)),
                }
            }

            for keyword in &card.keywords {
                let slot = *keyword_slots.entry(keyword.as_str()).or_insert_with(|| {
                    keyword_counts.push((keyword.as_str(), 0));
                    keyword_counts.len() - 1
                });
                keyword_counts[slot].1 += 1;
            }
        }

        analysis.dominant_suit = first_max(&suits);

        // Stable sort keeps first-seen order among equal counts.
        keyword_counts.sort_by(|a, b| b.1.cmp(&a.1));
        analysis.keywords = keyword_counts
            .into_iter()
            .take(TOP_KEYWORDS)
            .map(|(k, _)| k.to_string())
            .collect();

        analysis
    }

    /// Compose the overall summary paragraph.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        if self.major_arcana_count >= 3 {
            summary.push_str("This reading reveals significant life changes and spiritual themes. ");
        } else if self.major_arcana_count >= 1 {
            summary.push_str("Important life lessons and personal growth are highlighted. ");
        }

        if let Some(suit) = self.dominant_suit {
            summary.push_str(&format!("The focus is on {}. ", suit.theme()));
        }

        if self.mostly_reversed() {
            summary.push_str("Many reversed cards suggest internal work and reflection are needed. ");
        }

        summary.push_str(CLOSING_SENTENCE);
        summary
    }

    /// Advisory notes about how strongly the reading speaks.
    #[must_use]
    pub fn confidence_hints(&self) -> Vec<String> {
        let mut hints = Vec::new();

        if self.major_arcana_count >= 3 {
            hints.push(format!(
                "{} Major Arcana cards mark this as a highly significant reading.",
                self.major_arcana_count
            ));
        }

        if let Some(suit) = self.dominant_suit {
            hints.push(format!(
                "The prevalence of {} points to {}.",
                suit,
                suit.theme()
            ));
        }

        if self.reversed_count >= 3 {
            hints.push(format!(
                "{} reversed cards call for inner reflection before acting.",
                self.reversed_count
            ));
        }

        hints
    }

    /// Up to `MAX_ACTIONS` concrete suggestions, in trigger order.
    #[must_use]
    pub fn suggested_actions(&self) -> Vec<String> {
        let mut actions: Vec<&'static str> = Vec::new();

        if self.major_arcana_count >= 2 {
            actions.push("Pay attention to synchronicities and meaningful coincidences.");
        }

        if let Some(suit) = self.dominant_suit {
            actions.push(suit_action(suit));
        }

        if self.has_keyword("balance") {
            actions.push("Look for ways to restore balance between competing demands.");
        }

        if self.has_keyword("transformation") {
            actions.push("Embrace the changes unfolding rather than resisting them.");
        }

        actions
            .into_iter()
            .take(MAX_ACTIONS)
            .map(str::to_string)
            .collect()
    }

    /// Reversed cards make up at least half of a non-empty reading.
    fn mostly_reversed(&self) -> bool {
        self.total > 0 && self.reversed_count as f64 >= self.total as f64 / 2.0
    }

    fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}

fn suit_action(suit: Suit) -> &'static str {
    match suit {
        Suit::Wands => "Channel your energy into a creative project or new initiative.",
        Suit::Cups => "Make space to nurture your relationships and emotional needs.",
        Suit::Swords => "Communicate clearly and address conflicts directly.",
        Suit::Pentacles => "Take practical steps toward your material and career goals.",
    }
}

/// Highest count, earliest entry on ties.
fn first_max<T: Copy>(tally: &[(T, usize)]) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for &(item, count) in tally {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((item, count));
        }
    }
    best.map(|(item, _)| item)
}
