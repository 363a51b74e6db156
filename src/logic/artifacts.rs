//! Artifact Loading - Pre-Trained, Immutable Inputs
//!
//! Load vectorizer và expected-feature list từ disk, with validation.
//! Artifacts load once at startup; a missing or corrupt file is fatal to
//! detector construction. Every loaded blob gets its SHA-256 logged for
//! supportability.
//!
//! The ONNX model itself loads in `model::inference`.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::features::FeatureSchema;
use super::text::TfidfVectorizer;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub enum ArtifactError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactError::IoError(e) => write!(f, "IO Error: {}", e),
            ArtifactError::SerializationError(e) => write!(f, "Serialization Error: {}", e),
            ArtifactError::Validation(msg) => write!(f, "Artifact Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for ArtifactError {}

impl From<std::io::Error> for ArtifactError {
    fn from(err: std::io::Error) -> Self {
        ArtifactError::IoError(err)
    }
}

impl From<serde_json::Error> for ArtifactError {
    fn from(err: serde_json::Error) -> Self {
        ArtifactError::SerializationError(err)
    }
}

// ============================================================================
// CHECKSUM
// ============================================================================

/// SHA-256 of an artifact blob, hex-encoded
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn read_artifact(path: &Path, kind: &str) -> Result<Vec<u8>, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} artifact not found: {}", kind, path.display()),
        )));
    }

    let data = fs::read(path)?;
    log::info!(
        "Loaded {} artifact: {} ({} bytes, sha256 {})",
        kind,
        path.display(),
        data.len(),
        sha256_hex(&data)
    );
    Ok(data)
}

// ============================================================================
// LOADERS
// ============================================================================

/// Load the fitted vectorizer from its JSON artifact.
pub fn load_vectorizer(path: &Path) -> Result<TfidfVectorizer, ArtifactError> {
    let data = read_artifact(path, "vectorizer")?;
    let vectorizer: TfidfVectorizer = serde_json::from_slice(&data)?;

    if vectorizer.vocabulary_size() == 0 {
        log::warn!("Vectorizer vocabulary is empty; text features will be all-zero");
    }
    if vectorizer.idf_len() < vectorizer.vocabulary_size() {
        log::warn!(
            "IDF table shorter than vocabulary ({} < {}); missing terms weigh zero",
            vectorizer.idf_len(),
            vectorizer.vocabulary_size()
        );
    }

    Ok(vectorizer)
}

/// Load the ordered expected-feature list into a schema.
pub fn load_schema(path: &Path) -> Result<FeatureSchema, ArtifactError> {
    let data = read_artifact(path, "expected-features")?;
    let columns: Vec<String> = serde_json::from_slice(&data)?;

    if columns.is_empty() {
        log::warn!("Expected-feature list is empty; every row will be empty");
    }

    let schema = FeatureSchema::new(columns);
    log::info!(
        "Feature schema ready: {} columns (hash {:08x})",
        schema.len(),
        schema.hash()
    );
    Ok(schema)
}

// ============================================================================
// TESTS
// ============================================================================
