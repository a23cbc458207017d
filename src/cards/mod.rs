//! Card system: definitions and catalog.
//!
//! ## Key Types
//!
//! - `CardId`: String identifier for a card
//! - `Arcana` / `Suit`: Classification used by the engine's tallies
//! - `Card`: Static card data with keywords and meaning texts
//! - `CardCatalog`: Ordered card lookup

pub mod definition;
pub mod registry;

pub use definition::{Arcana, Card, CardId, Suit, SPIRITUAL_THEME};
pub use registry::CardCatalog;
