//! Dealing shuffled cards onto a spread.

use crate::cards::Card;
use crate::core::{DealConfig, RandomSource};
use crate::spreads::{Orientation, PlacedCard, Spread};

/// Deal cards onto a spread with the default 30% reversal chance.
///
/// See [`deal_with`].
#[must_use]
pub fn deal<R>(cards: &[Card], spread: &Spread, rng: &mut R) -> Vec<PlacedCard>
where
    R: RandomSource + ?Sized,
{
    deal_with(cards, spread, rng, DealConfig::default())
}

/// Deal the leading cards onto the spread's positions in order.
///
/// Deals `min(cards, positions)` placements. Each placement takes the
/// position's own `index`, so non-contiguous numbering is preserved.
/// One draw per card decides orientation: above the threshold is reversed.
#[must_use]
pub fn deal_with<R>(
    cards: &[Card],
    spread: &Spread,
    rng: &mut R,
    config: DealConfig,
) -> Vec<PlacedCard>
where
    R: RandomSource + ?Sized,
{
    let placed: Vec<PlacedCard> = cards
        .iter()
        .zip(&spread.positions)
        .map(|(card, position)| {
            let orientation = if rng.next_f64() > config.reversal_threshold {
                Orientation::Reversed
            } else {
                Orientation::Upright
            };
            PlacedCard {
                card_id: card.id.clone(),
                orientation,
                position: position.index,
            }
        })
        .collect();

    tracing::debug!(
        spread = %spread.id,
        dealt = placed.len(),
        reversed = placed.iter().filter(|p| p.orientation.is_reversed()).count(),
        "dealt cards"
    );

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreads::SpreadPosition;

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::major(format!("major-{}", i), format!("Card {}", i), i as u8))
            .collect()
    }

    fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter().cycle();
        move || iter.next().unwrap_or(0.0)
    }

    #[test]
    fn test_deal_uses_position_indices() {
        let spread = Spread::new("gappy", "Gappy")
            .with_position(SpreadPosition::new(10, "A", "a"))
            .with_position(SpreadPosition::new(20, "B", "b"))
            .with_position(SpreadPosition::new(5, "C", "c"));

        let mut rng = sequence(vec![0.1]);
        let placed = deal(&cards(5), &spread, &mut rng);

        let positions: Vec<_> = placed.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![10, 20, 5]);
        assert_eq!(placed[0].card_id.as_str(), "major-0");
        assert_eq!(placed[2].card_id.as_str(), "major-2");
    }

    #[test]
    fn test_deal_stops_at_shorter_input() {
        let spread = Spread::celtic_cross();
        let mut rng = sequence(vec![0.1]);
        assert_eq!(deal(&cards(3), &spread, &mut rng).len(), 3);
        assert!(deal(&[], &spread, &mut rng).is_empty());
    }

    #[test]
    fn test_orientation_threshold() {
        let spread = Spread::celtic_cross();
        let mut rng = sequence(vec![0.0, 0.7, 0.7000001, 0.99]);
        let placed = deal(&cards(4), &spread, &mut rng);

        let orientations: Vec<_> = placed.iter().map(|p| p.orientation).collect();
        assert_eq!(
            orientations,
            vec![
                Orientation::Upright,
                Orientation::Upright,
                Orientation::Reversed,
                Orientation::Reversed,
            ]
        );
    }

    #[test]
    fn test_custom_threshold() {
        let spread = Spread::three_card();
        let mut rng = sequence(vec![0.99]);
        let placed = deal_with(&cards(3), &spread, &mut rng, DealConfig::upright_only());
        assert!(placed.iter().all(|p| p.orientation == Orientation::Upright));
    }
}
