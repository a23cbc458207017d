//! Drawing a complete reading in one call.

use serde::{Deserialize, Serialize};

use crate::cards::CardCatalog;
use crate::core::{DealConfig, InterpretOptions, RandomSource, Result};
use crate::interpret::{interpret, InterpretationResult};
use crate::rules::CombinationRule;
use crate::spreads::{PlacedCard, Spread};

use super::deal::deal_with;
use super::shuffle::shuffle;

/// A dealt spread together with its interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub placed: Vec<PlacedCard>,
    pub result: InterpretationResult,
}

/// Shuffle the catalog, deal onto the spread and interpret the result.
///
/// With a seeded `ReadingRng` the whole reading is reproducible.
///
/// ```
/// use tarot_reader::cards::{Card, CardCatalog};
/// use tarot_reader::core::{DealConfig, InterpretOptions, ReadingRng};
/// use tarot_reader::deck::draw_reading;
/// use tarot_reader::spreads::Spread;
///
/// let catalog = CardCatalog::from_cards(
///     (0..5).map(|i| Card::major(format!("major-{}", i), format!("Card {}", i), i)),
/// )
/// .unwrap();
///
/// let mut rng = ReadingRng::new(7);
/// let reading = draw_reading(
///     &catalog,
///     &Spread::three_card(),
///     &[],
///     InterpretOptions::default(),
///     DealConfig::default(),
///     &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(reading.placed.len(), 3);
/// assert_eq!(reading.result.major_arcana_count, 3);
/// ```
pub fn draw_reading<R>(
    catalog: &CardCatalog,
    spread: &Spread,
    rules: &[CombinationRule],
    options: InterpretOptions,
    config: DealConfig,
    rng: &mut R,
) -> Result<Reading>
where
    R: RandomSource + ?Sized,
{
    tracing::debug!(spread = %spread.id, catalog = catalog.len(), "drawing reading");

    let shuffled = shuffle(catalog.as_slice(), rng);
    let placed = deal_with(&shuffled, spread, rng, config);
    let result = interpret(spread, &placed, catalog.as_slice(), rules, options)?;

    Ok(Reading { placed, result })
}
