//! Spread definitions.
//!
//! A `Spread` is an ordered list of positions. Each position has a
//! numeric `index` that placements refer to; the engine treats two
//! positions as adjacent when their indices differ by at most one,
//! regardless of the `x`/`y` layout hints.

use serde::{Deserialize, Serialize};

/// One placement slot within a spread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadPosition {
    /// Slot number referenced by placements. Unique within a spread.
    pub index: i32,

    /// Display label, e.g. "Past".
    pub name: String,

    /// Semantic hint used in the position modifier sentence.
    pub role_hint: String,

    /// Layout only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,

    /// Layout only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl SpreadPosition {
    /// Create a new position without layout coordinates.
    pub fn new(index: i32, name: impl Into<String>, role_hint: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            role_hint: role_hint.into(),
            x: None,
            y: None,
        }
    }

    /// Set layout coordinates.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }
}

/// A named layout of positions.
///
/// ## Example
///
/// ```
/// use tarot_reader::spreads::{Spread, SpreadPosition};
///
/// let spread = Spread::new("focus", "Focus")
///     .with_position(SpreadPosition::new(0, "Focus", "central theme"));
///
/// assert_eq!(spread.len(), 1);
/// assert_eq!(spread.position(0).unwrap().role_hint, "central theme");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spread {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Positions in display order.
    pub positions: Vec<SpreadPosition>,

    /// Free-form layout hint for renderers. Ignored by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

impl Spread {
    /// Create an empty spread.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            positions: Vec::new(),
            layout: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a position.
    #[must_use]
    pub fn with_position(mut self, position: SpreadPosition) -> Self {
        self.positions.push(position);
        self
    }

    /// Set the layout hint.
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Find a position by its index.
    ///
    /// With duplicate indices the first match wins.
    #[must_use]
    pub fn position(&self, index: i32) -> Option<&SpreadPosition> {
        self.positions.iter().find(|p| p.index == index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    // === Presets ===

    /// A single card pull.
    #[must_use]
    pub fn single_card() -> Self {
        Self::new("single-card", "Single Card")
            .with_description("One card for a quick focus on the question at hand.")
            .with_layout("row")
            .with_position(SpreadPosition::new(0, "Focus", "Central theme").at(0.0, 0.0))
    }

    /// Past, present and future in a row.
    #[must_use]
    pub fn three_card() -> Self {
        let positions = [
            (0, "Past", "Influences that shaped the situation", 0.0),
            (1, "Present", "The current state of affairs", 1.0),
            (2, "Future", "The likely direction ahead", 2.0),
        ];

        positions.into_iter().fold(
            Self::new("three-card", "Past, Present, Future")
                .with_description(
                    "A simple timeline of how the situation developed and where it leads.",
                )
                .with_layout("row"),
            |spread, (index, name, hint, x)| {
                spread.with_position(SpreadPosition::new(index, name, hint).at(x, 0.0))
            },
        )
    }

    /// The ten-card Celtic Cross.
    #[must_use]
    pub fn celtic_cross() -> Self {
        let positions = [
            (0, "Present", "The heart of the matter", 1.0, 1.0),
            (1, "Challenge", "The obstacle crossing your path", 1.0, 1.0),
            (2, "Past", "Foundations and recent events", 0.0, 1.0),
            (3, "Future", "What is approaching", 2.0, 1.0),
            (4, "Above", "Conscious goals and ideals", 1.0, 0.0),
            (5, "Below", "Subconscious drives", 1.0, 2.0),
            (6, "Advice", "The best approach to take", 3.0, 3.0),
            (7, "External Influences", "People and forces around you", 3.0, 2.0),
            (8, "Hopes and Fears", "What you hope for and dread", 3.0, 1.0),
            (9, "Outcome", "Where the current path leads", 3.0, 0.0),
        ];

        positions.into_iter().fold(
            Self::new("celtic-cross", "Celtic Cross")
                .with_description("A detailed ten-card look at a situation and its influences.")
                .with_layout("cross-and-staff"),
            |spread, (index, name, hint, x, y)| {
                spread.with_position(SpreadPosition::new(index, name, hint).at(x, y))
            },
        )
    }
}
