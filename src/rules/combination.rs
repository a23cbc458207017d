//! Combination rules.
//!
//! A combination rule names a set of cards that carry extra meaning when
//! they appear together. The catalog of rules is passed to the engine on
//! every call, but no rule currently contributes to the interpretation.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// When a combination rule applies.
///
/// Serialized as a plain tag string. Unknown tags are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleCondition {
    /// The cards sit in neighbouring positions.
    Adjacent,
    /// The cards appear anywhere in the spread.
    AnyPosition,
    /// Any other tag.
    Custom(String),
}

impl RuleCondition {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            RuleCondition::Adjacent => "adjacent",
            RuleCondition::AnyPosition => "any_position",
            RuleCondition::Custom(tag) => tag,
        }
    }
}

impl From<String> for RuleCondition {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "adjacent" => RuleCondition::Adjacent,
            "any_position" => RuleCondition::AnyPosition,
            _ => RuleCondition::Custom(tag),
        }
    }
}

impl From<RuleCondition> for String {
    fn from(condition: RuleCondition) -> Self {
        match condition {
            RuleCondition::Custom(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

/// A named, weighted association between cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationRule {
    pub name: String,
    pub card_ids: Vec<CardId>,
    pub condition: RuleCondition,
    pub modifier: String,
    pub weight: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CombinationRule {
    /// Create an active rule with weight 1.
    pub fn new(
        name: impl Into<String>,
        card_ids: impl IntoIterator<Item = CardId>,
        condition: RuleCondition,
        modifier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            card_ids: card_ids.into_iter().collect(),
            condition,
            modifier: modifier.into(),
            weight: 1,
            is_active: true,
        }
    }

    /// Set the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Mark the rule inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Check if a card takes part in this rule.
    #[must_use]
    pub fn involves(&self, card: &CardId) -> bool {
        self.card_ids.contains(card)
    }
}
