//! Reading configuration types.
//!
//! - `InterpretOptions`: How the engine phrases reversed cards
//! - `DealConfig`: How the dealer draws orientations
//!
//! Both deserialize from partial JSON; missing fields take their defaults.

use serde::{Deserialize, Serialize};

/// How strongly a reversed card departs from its upright meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReversalMode {
    /// Reversed text blended with a note that the energy is blocked or internal.
    #[default]
    Soft,
    /// Reversed text used verbatim.
    Strong,
}

impl std::fmt::Display for ReversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReversalMode::Soft => f.write_str("soft"),
            ReversalMode::Strong => f.write_str("strong"),
        }
    }
}

/// Options passed to the interpretation engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterpretOptions {
    /// Reversal phrasing policy (default: soft).
    pub reversal_mode: ReversalMode,
}

impl InterpretOptions {
    /// Create options with the default (soft) reversal mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reversal mode.
    #[must_use]
    pub fn with_reversal_mode(mut self, mode: ReversalMode) -> Self {
        self.reversal_mode = mode;
        self
    }

    /// Shorthand for strong reversals.
    #[must_use]
    pub fn strong() -> Self {
        Self::new().with_reversal_mode(ReversalMode::Strong)
    }
}

/// Dealer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealConfig {
    /// A draw strictly above this value deals the card reversed.
    /// Default: 0.7 (30% reversals).
    pub reversal_threshold: f64,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            reversal_threshold: 0.7,
        }
    }
}

impl DealConfig {
    /// Set the reversal threshold.
    #[must_use]
    pub fn with_reversal_threshold(mut self, threshold: f64) -> Self {
        self.reversal_threshold = threshold;
        self
    }

    /// Never deal reversed cards.
    #[must_use]
    pub fn upright_only() -> Self {
        Self::default().with_reversal_threshold(1.0)
    }
}
