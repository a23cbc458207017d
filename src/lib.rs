//! # tarot-reader
//!
//! A rule-based tarot reading engine: lay out a spread, place cards,
//! and get a deterministic textual interpretation.
//!
//! ## Design Principles
//!
//! 1. **Pure Engine**: `interpret` is a function of its arguments. Card,
//!    spread and rule catalogs are passed in on every call; nothing is
//!    cached or retained between readings.
//!
//! 2. **Randomness at the Edges**: Only shuffling and dealing draw random
//!    numbers, through an injectable `RandomSource`.
//!
//! 3. **Stable Text**: Every generated sentence is fixed or templated, so
//!    identical input always yields byte-identical output.
//!
//! ## Modules
//!
//! - `core`: Errors, random sources, configuration
//! - `cards`: Card definitions and the card catalog
//! - `spreads`: Spreads, positions and placed cards
//! - `rules`: Combination rules
//! - `interpret`: The interpretation engine
//! - `deck`: Shuffling, dealing, one-call readings
//! - `validation`: Caller-side input checks

pub mod core;
pub mod cards;
pub mod spreads;
pub mod rules;
pub mod interpret;
pub mod deck;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    DealConfig, InterpretOptions, ReversalMode,
    RandomSource, ReadingRng, ReadingRngState,
    ReadingError, Result,
};

pub use crate::cards::{Arcana, Card, CardCatalog, CardId, Suit};

pub use crate::spreads::{Orientation, PlacedCard, Spread, SpreadPosition};

pub use crate::rules::{CombinationRule, RuleCondition};

pub use crate::interpret::{
    interpret, InterpretationResult, PositionInterpretation, ReadingAnalysis,
};

pub use crate::deck::{deal, deal_with, draw_reading, shuffle, shuffle_in_place, Reading};

pub use crate::validation::{
    validate_card, validate_catalog, validate_placements, validate_spread,
    CardIssue, PlacementIssue, SpreadIssue,
};
