//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change default artifact locations, only edit this file.

/// Phrases that commonly appear in fraudulent postings.
///
/// Matched as case-insensitive substrings over the combined posting text,
/// no word-boundary requirement.
pub const SUSPICIOUS_PHRASES: &[&str] = &[
    "quick money",
    "no experience",
    "immediate start",
    "investment",
    "limited time",
    "work from home",
];

/// Descriptions shorter than this (trimmed, in characters) are flagged.
pub const SHORT_DESCRIPTION_MIN_CHARS: usize = 50;

/// Default directory holding the pre-trained artifacts
pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

/// Default fitted vectorizer file name
pub const DEFAULT_VECTORIZER_FILE: &str = "vectorizer.json";

/// Default expected-feature list file name
pub const DEFAULT_FEATURES_FILE: &str = "expected_features.json";

/// Default classifier model file name
pub const DEFAULT_MODEL_FILE: &str = "model.onnx";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "JobShield";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get vectorizer artifact path from environment or use default
pub fn get_vectorizer_path() -> String {
    std::env::var("JOBSHIELD_VECTORIZER_PATH")
        .unwrap_or_else(|_| format!("{}/{}", DEFAULT_ARTIFACT_DIR, DEFAULT_VECTORIZER_FILE))
}

/// Get expected-feature list path from environment or use default
pub fn get_features_path() -> String {
    std::env::var("JOBSHIELD_FEATURES_PATH")
        .unwrap_or_else(|_| format!("{}/{}", DEFAULT_ARTIFACT_DIR, DEFAULT_FEATURES_FILE))
}

/// Get classifier model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("JOBSHIELD_MODEL_PATH")
        .unwrap_or_else(|_| format!("{}/{}", DEFAULT_ARTIFACT_DIR, DEFAULT_MODEL_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_set_is_lowercase() {
        for phrase in SUSPICIOUS_PHRASES {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }

    #[test]
    fn test_default_paths() {
        assert!(get_vectorizer_path().ends_with(DEFAULT_VECTORIZER_FILE));
        assert!(get_features_path().ends_with(DEFAULT_FEATURES_FILE));
        assert!(get_model_path().ends_with(DEFAULT_MODEL_FILE));
    }
}
