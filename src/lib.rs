//! JobShield Core - Job Scam Detection Pipeline
//!
//! Loads three pre-trained artifacts (ONNX classifier, fitted TF-IDF
//! vectorizer, expected-feature list), assembles a schema-aligned feature
//! row from a submitted posting, and returns a Legitimate/Scam label with
//! a heuristic rationale.
//!
//! ```no_run
//! use jobshield_core::{ArtifactConfig, Detector, JobPosting};
//!
//! let detector = Detector::load(&ArtifactConfig::from_env())?;
//! let result = detector.classify(&JobPosting {
//!     title: "Data entry clerk".to_string(),
//!     description: "Quick money, work from home!".to_string(),
//!     ..Default::default()
//! })?;
//! println!("{}: {}", result.label, result.reasons.join(" "));
//! # Ok::<(), jobshield_core::PipelineError>(())
//! ```

pub mod api;
pub mod constants;
pub mod logic;

pub use logic::config::ArtifactConfig;
pub use logic::pipeline::{Detector, DetectorStatus, Label, PipelineError, PredictionResult};
pub use logic::posting::JobPosting;

/// Set up env_logger for a host binary.
///
/// Filter defaults to `info`; override with `RUST_LOG`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
