//! Shuffling, dealing, and one-call readings.
//!
//! These are the only parts of the crate that consume randomness. They
//! take any `RandomSource`, so tests can pass a fixed sequence and
//! production code a seeded `ReadingRng`.

pub mod deal;
pub mod reading;
pub mod shuffle;

pub use deal::{deal, deal_with};
pub use reading::{draw_reading, Reading};
pub use shuffle::{shuffle, shuffle_in_place};
