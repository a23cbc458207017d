//! Spreads and placements.
//!
//! ## Key Types
//!
//! - `Spread` / `SpreadPosition`: The layout a reading fills
//! - `PlacedCard`: A card, its orientation, and the position index it occupies
//! - `Orientation`: Upright or reversed

pub mod placement;
pub mod spread;

pub use placement::{Orientation, PlacedCard};
pub use spread::{Spread, SpreadPosition};
