//! Core reading types: errors, randomness, configuration.
//!
//! Everything here is independent of tarot semantics and is shared by
//! the engine and the deck utilities.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DealConfig, InterpretOptions, ReversalMode};
pub use error::{ReadingError, Result};
pub use rng::{RandomSource, ReadingRng, ReadingRngState};
