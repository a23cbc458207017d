//! Shuffle and deal tests.
//!
//! These tests verify:
//! - Shuffling permutes without losing or duplicating cards
//! - Shuffling is close to uniform over many trials
//! - Dealing maps cards onto spread position indices
//! - Orientation draws follow the 70/30 split

use proptest::prelude::*;

use tarot_reader::cards::{Card, CardCatalog, Suit};
use tarot_reader::core::{DealConfig, InterpretOptions, RandomSource, ReadingRng};
use tarot_reader::deck::{deal, deal_with, draw_reading, shuffle, shuffle_in_place};
use tarot_reader::spreads::{Orientation, PlacedCard, Spread, SpreadPosition};

fn full_deck() -> Vec<Card> {
    let mut deck: Vec<Card> = (0..22u8)
        .map(|n| Card::major(format!("major-{}", n), format!("Major {}", n), n))
        .collect();
    for suit in Suit::ALL {
        for n in 1..=14u8 {
            deck.push(Card::minor(
                format!("{}-{}", suit, n),
                format!("{} of {}", n, suit),
                suit,
                n,
            ));
        }
    }
    deck
}

/// Cycles through a fixed list of draws.
struct Fixed {
    values: Vec<f64>,
    next: usize,
}

impl Fixed {
    fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Fixed {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[test]
fn test_full_deck_has_78_cards() {
    let deck = full_deck();
    assert_eq!(deck.len(), 78);
    assert!(CardCatalog::from_cards(deck).is_ok());
}

#[test]
fn test_exact_permutation_from_fixed_source() {
    // i=4: j=floor(0.5*5)=2, i=3: j=floor(0.0*4)=0,
    // i=2: j=floor(0.9*3)=2, i=1: j=floor(0.6*2)=1
    let mut source = Fixed::new(&[0.5, 0.0, 0.9, 0.6]);
    let shuffled = shuffle(&['a', 'b', 'c', 'd', 'e'], &mut source);
    assert_eq!(shuffled, vec!['d', 'b', 'e', 'a', 'c']);
}

#[test]
fn test_shuffle_in_place_matches_copy() {
    let deck = full_deck();
    let copy = shuffle(&deck, &mut ReadingRng::new(5));

    let mut in_place = deck.clone();
    shuffle_in_place(&mut in_place, &mut ReadingRng::new(5));
    assert_eq!(copy, in_place);
}

#[test]
fn test_shuffle_is_roughly_uniform() {
    // Each of 3 items should land in each slot about a third of the time.
    let trials = 6000;
    let mut counts = [[0usize; 3]; 3];
    let mut rng = ReadingRng::new(2024);

    for _ in 0..trials {
        let shuffled = shuffle(&[0usize, 1, 2], &mut rng);
        for (slot, &item) in shuffled.iter().enumerate() {
            counts[slot][item] += 1;
        }
    }

    for row in counts {
        for count in row {
            assert!(
                (1800..=2200).contains(&count),
                "slot count {} outside expected range",
                count
            );
        }
    }
}

#[test]
fn test_deal_reversal_rate() {
    let spread = Spread::celtic_cross();
    let deck = full_deck();
    let mut rng = ReadingRng::new(99);

    let mut reversed = 0usize;
    let mut total = 0usize;
    for _ in 0..1000 {
        let placed = deal(&deck, &spread, &mut rng);
        total += placed.len();
        reversed += placed.iter().filter(|p| p.orientation.is_reversed()).count();
    }

    let rate = reversed as f64 / total as f64;
    assert!((0.27..0.33).contains(&rate), "reversal rate {}", rate);
}

#[test]
fn test_deal_with_fixed_orientations() {
    let spread = Spread::three_card();
    let deck = full_deck();
    let mut source = Fixed::new(&[0.71, 0.2, 0.7]);

    let placed = deal(&deck, &spread, &mut source);
    assert_eq!(
        placed,
        vec![
            PlacedCard::reversed("major-0", 0),
            PlacedCard::upright("major-1", 1),
            PlacedCard::upright("major-2", 2),
        ]
    );
}

#[test]
fn test_deal_with_threshold() {
    let spread = Spread::three_card();
    let deck = full_deck();
    let mut source = Fixed::new(&[0.6]);

    let placed = deal_with(
        &deck,
        &spread,
        &mut source,
        DealConfig::default().with_reversal_threshold(0.5),
    );
    assert!(placed.iter().all(|p| p.orientation == Orientation::Reversed));
}

#[test]
fn test_dyn_source() {
    let spread = Spread::single_card();
    let deck = full_deck();
    let mut rng = ReadingRng::new(1);
    let source: &mut dyn RandomSource = &mut rng;

    let shuffled = shuffle(&deck, source);
    assert_eq!(deal(&shuffled, &spread, source).len(), 1);
}

#[test]
fn test_draw_full_reading() {
    let catalog = CardCatalog::from_cards(full_deck()).unwrap();
    let mut rng = ReadingRng::new(78);
    let state = rng.state();

    let reading = draw_reading(
        &catalog,
        &Spread::celtic_cross(),
        &[],
        InterpretOptions::default(),
        DealConfig::default(),
        &mut rng,
    )
    .unwrap();

    assert_eq!(reading.placed.len(), 10);
    let mut ids: Vec<_> = reading.placed.iter().map(|p| p.card_id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10, "a card was dealt twice");

    // Replaying from the saved state reproduces the reading.
    let replay = draw_reading(
        &catalog,
        &Spread::celtic_cross(),
        &[],
        InterpretOptions::default(),
        DealConfig::default(),
        &mut ReadingRng::from_state(&state),
    )
    .unwrap();
    assert_eq!(reading, replay);
}

proptest! {
    #[test]
    fn prop_shuffle_preserves_multiset(items in prop::collection::vec(0u8..20, 0..60), seed: u64) {
        let mut shuffled = shuffle(&items, &mut ReadingRng::new(seed));
        let mut original = items.clone();
        shuffled.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(shuffled, original);
    }

    #[test]
    fn prop_deal_respects_indices(
        indices in prop::collection::vec(-50i32..50, 1..12),
        card_count in 0usize..20,
        seed: u64,
    ) {
        let spread = indices.iter().fold(Spread::new("p", "Prop"), |s, &i| {
            s.with_position(SpreadPosition::new(i, format!("P{}", i), "hint"))
        });
        let deck: Vec<Card> = full_deck().into_iter().take(card_count).collect();

        let placed = deal(&deck, &spread, &mut ReadingRng::new(seed));

        prop_assert_eq!(placed.len(), card_count.min(spread.len()));
        for (i, p) in placed.iter().enumerate() {
            prop_assert_eq!(p.position, spread.positions[i].index);
            prop_assert_eq!(&p.card_id, &deck[i].id);
        }
    }
}
