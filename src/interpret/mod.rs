//! Rule-based interpretation of a reading.
//!
//! ## Key Types
//!
//! - `interpret`: The engine entry point
//! - `InterpretationResult` / `PositionInterpretation`: Output records
//! - `ReadingAnalysis`: Whole-reading tallies and generated advice
//!
//! ## Pipeline
//!
//! 1. Resolve every placement (fail atomically on unknown cards/positions)
//! 2. Per placement: base meaning, position modifier, neighbour notes
//! 3. Over the whole reading: counts, dominant suit, keywords, summary,
//!    confidence hints, suggested actions

pub mod analysis;
pub mod engine;
pub mod position;
pub mod result;

pub use analysis::ReadingAnalysis;
pub use engine::interpret;
pub use result::{InterpretationResult, PositionInterpretation};
