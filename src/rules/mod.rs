//! Combination rules supplied alongside the card catalog.
//!
//! Rules are threaded through the engine so callers can pass their full
//! rule catalog, but they do not yet influence any output.

pub mod combination;

pub use combination::{CombinationRule, RuleCondition};
