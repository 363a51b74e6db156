//! Inference Engine - ONNX Runtime Integration
//!
//! Load và chạy ONNX model.
//! Tách riêng khỏi pipeline để dễ swap model.

use std::fs;
use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::logic::artifacts::sha256_hex;
use crate::logic::features::FeatureRow;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub feature_count: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Binary classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Legitimate,
    Scam,
}

impl Label {
    /// Raw model output 1 means scam, anything else legitimate
    pub fn from_raw(raw: i64) -> Self {
        if raw == 1 {
            Label::Scam
        } else {
            Label::Legitimate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Legitimate => "legitimate",
            Label::Scam => "scam",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifier output for one row: the raw model output paired with its
/// mapped label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Raw model output: 1 means the positive (scam) class
    pub raw: i64,
    pub label: Label,
    pub inference_time_us: u64, // Microseconds
    pub method: String,         // "onnx" or "stub"
}

impl Verdict {
    /// Build a verdict from a raw model output.
    pub fn from_raw(raw: i64, inference_time_us: u64, method: &str) -> Self {
        Self {
            raw,
            label: Label::from_raw(raw),
            inference_time_us,
            method: method.to_string(),
        }
    }
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

// ============================================================================
// CLASSIFIER ENGINE TRAIT
// ============================================================================

/// Trait cho classifier engines (ONNX, stubs, etc.)
///
/// Any binary classifier satisfying "row of numeric features in, {0,1}
/// out" can sit behind this seam without touching the rest of the
/// pipeline.
pub trait ClassifierEngine: Send + Sync {
    fn predict(&self, row: &FeatureRow) -> Result<Verdict, InferenceError>;
    fn is_loaded(&self) -> bool;
    fn model_name(&self) -> String;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX Runtime backed classifier.
///
/// The session requires exclusive access to run, so it sits behind a
/// mutex; the metadata is immutable after load.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    metadata: ModelMetadata,
}

impl OnnxClassifier {
    /// Load an ONNX model từ file.
    pub fn load(model_path: &Path, feature_count: usize) -> Result<Self, InferenceError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(InferenceError(format!(
                "Model not found: {}",
                model_path.display()
            )));
        }

        let model_bytes = fs::read(model_path)
            .map_err(|e| InferenceError(format!("Failed to read model: {}", e)))?;
        log::info!(
            "Loaded model artifact: {} ({} bytes, sha256 {})",
            model_path.display(),
            model_bytes.len(),
            sha256_hex(&model_bytes)
        );

        let session = Session::builder()
            .map_err(|e| InferenceError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("Failed to set optimization: {}", e)))?
            .commit_from_memory(&model_bytes)
            .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

        log::info!("ONNX model loaded successfully");

        let metadata = ModelMetadata {
            model_path: model_path.display().to_string(),
            feature_count,
            loaded_at: chrono::Utc::now(),
        };

        Ok(Self {
            session: Mutex::new(session),
            metadata,
        })
    }

    /// Get model metadata
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

impl ClassifierEngine for OnnxClassifier {
    fn predict(&self, row: &FeatureRow) -> Result<Verdict, InferenceError> {
        let start_time = std::time::Instant::now();

        if row.len() != self.metadata.feature_count {
            return Err(InferenceError(format!(
                "Row has {} features, model expects {}",
                row.len(),
                self.metadata.feature_count
            )));
        }

        let mut session = self.session.lock();

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError("No output defined".to_string()))?;

        // Single-row feature matrix: [1, n]
        let input_array = Array2::<f32>::from_shape_vec((1, row.len()), row.as_slice().to_vec())
            .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError("No output".to_string()))?;

        // Classifiers exported from tree ensembles emit an i64 label
        // tensor; float-output models get thresholded at 0.5.
        let raw = match output.try_extract_tensor::<i64>() {
            Ok(tensor) => tensor
                .1
                .first()
                .copied()
                .ok_or_else(|| InferenceError("Empty output tensor".to_string()))?,
            Err(_) => {
                let tensor = output
                    .try_extract_tensor::<f32>()
                    .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;
                let value = tensor
                    .1
                    .first()
                    .copied()
                    .ok_or_else(|| InferenceError("Empty output tensor".to_string()))?;
                i64::from(value >= 0.5)
            }
        };

        Ok(Verdict::from_raw(
            raw,
            start_time.elapsed().as_micros() as u64,
            "onnx",
        ))
    }

    fn is_loaded(&self) -> bool {
        true
    }

    fn model_name(&self) -> String {
        self.metadata.model_path.clone()
    }
}

// ============================================================================
// TESTS
// ============================================================================
