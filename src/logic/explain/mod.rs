//! Explain Module - Rationale Text
//!
//! Heuristic explanations shown next to the label.

pub mod engine;

pub use engine::explain;
