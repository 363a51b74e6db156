//! Classification Pipeline - Heuristics, Assembly, Inference, Explanation
//!
//! One submission triggers one complete run: extract signals, assemble
//! the schema-aligned row, call the classifier, build the rationale.
//! Artifacts load once in `Detector::load` and stay immutable for the
//! process lifetime - no ambient globals.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::artifacts::{self, ArtifactError};
use super::config::ArtifactConfig;
use super::explain;
use super::features::{assembler, heuristics, FeatureSchema};
use super::model::{ClassifierEngine, InferenceError, OnnxClassifier};
use super::posting::JobPosting;
use super::text::TfidfVectorizer;

pub use super::model::Label;

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Result of one classification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: Label,
    /// Heuristic rationale lines, fixed order (independent of the label)
    pub reasons: Vec<String>,
    pub inference_time_us: u64,
    pub method: String,
}

/// Detector status for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorStatus {
    pub model_loaded: bool,
    pub model_name: String,
    pub feature_count: usize,
    pub vocabulary_size: usize,
    pub inference_count: u64,
    pub avg_latency_ms: f32,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub enum PipelineError {
    Artifact(ArtifactError),
    Inference(InferenceError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Artifact(e) => write!(f, "Artifact Error: {}", e),
            PipelineError::Inference(e) => write!(f, "Inference Error: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ArtifactError> for PipelineError {
    fn from(err: ArtifactError) -> Self {
        PipelineError::Artifact(err)
    }
}

impl From<InferenceError> for PipelineError {
    fn from(err: InferenceError) -> Self {
        PipelineError::Inference(err)
    }
}

// ============================================================================
// DETECTOR
// ============================================================================

/// The assembled pipeline: loaded artifacts plus inference counters.
///
/// Share one instance (or an `Arc<Detector>`) across threads; every
/// submission allocates its own derived values.
pub struct Detector {
    vectorizer: TfidfVectorizer,
    schema: FeatureSchema,
    engine: Box<dyn ClassifierEngine>,

    // Latency stats
    inference_count: AtomicU64,
    latency_sum_us: AtomicU64,
}

impl Detector {
    /// Load all three artifacts and build the production pipeline.
    ///
    /// Any artifact failure is fatal - the pipeline cannot serve without
    /// them.
    pub fn load(config: &ArtifactConfig) -> Result<Self, PipelineError> {
        let vectorizer = artifacts::load_vectorizer(&config.vectorizer_path)?;
        let schema = artifacts::load_schema(&config.features_path)?;
        let engine = OnnxClassifier::load(&config.model_path, schema.len())?;

        log::info!(
            "{} v{} detector ready: {} expected columns, vocabulary of {} terms",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION,
            schema.len(),
            vectorizer.vocabulary_size()
        );

        Ok(Self::with_engine(vectorizer, schema, Box::new(engine)))
    }

    /// Build a pipeline around any classifier engine (test seam).
    pub fn with_engine(
        vectorizer: TfidfVectorizer,
        schema: FeatureSchema,
        engine: Box<dyn ClassifierEngine>,
    ) -> Self {
        Self {
            vectorizer,
            schema,
            engine,
            inference_count: AtomicU64::new(0),
            latency_sum_us: AtomicU64::new(0),
        }
    }

    /// Classify one posting.
    pub fn classify(&self, posting: &JobPosting) -> Result<PredictionResult, PipelineError> {
        let signals = heuristics::extract(posting);
        let row = assembler::assemble(posting, &signals, &self.vectorizer, &self.schema);

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Assembled feature row: {}", row.to_log_entry(&self.schema));
        }

        if !row.matches(&self.schema) {
            return Err(PipelineError::Inference(InferenceError(
                "Assembled row does not match the loaded schema".to_string(),
            )));
        }

        let verdict = self.engine.predict(&row)?;

        // Track metrics
        self.inference_count.fetch_add(1, Ordering::Relaxed);
        self.latency_sum_us
            .fetch_add(verdict.inference_time_us, Ordering::Relaxed);

        Ok(PredictionResult {
            label: verdict.label,
            reasons: explain::explain(&signals),
            inference_time_us: verdict.inference_time_us,
            method: verdict.method,
        })
    }

    /// Read-only status snapshot for the UI.
    pub fn status(&self) -> DetectorStatus {
        let count = self.inference_count.load(Ordering::Relaxed);
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        DetectorStatus {
            model_loaded: self.engine.is_loaded(),
            model_name: self.engine.model_name(),
            feature_count: self.schema.len(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
            inference_count: count,
            avg_latency_ms: avg,
        }
    }

    /// The loaded expected-column schema.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }
}

// ============================================================================
// TESTS
// ============================================================================
