//! Artifact Configuration
//!
//! Where the three pre-trained artifacts live on disk. Defaults come from
//! `constants.rs`; each path can be overridden through the environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{get_features_path, get_model_path, get_vectorizer_path};

/// Paths to the three startup artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    pub vectorizer_path: PathBuf,
    pub features_path: PathBuf,
    pub model_path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ArtifactConfig {
    /// Resolve paths from the environment, falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            vectorizer_path: PathBuf::from(get_vectorizer_path()),
            features_path: PathBuf::from(get_features_path()),
            model_path: PathBuf::from(get_model_path()),
        }
    }

    /// All three artifacts under one directory, with the default file names.
    pub fn with_dir(dir: &Path) -> Self {
        Self {
            vectorizer_path: dir.join(crate::constants::DEFAULT_VECTORIZER_FILE),
            features_path: dir.join(crate::constants::DEFAULT_FEATURES_FILE),
            model_path: dir.join(crate::constants::DEFAULT_MODEL_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_dir_uses_default_file_names() {
        let config = ArtifactConfig::with_dir(Path::new("/srv/jobshield"));
        assert_eq!(
            config.vectorizer_path,
            PathBuf::from("/srv/jobshield/vectorizer.json")
        );
        assert_eq!(
            config.features_path,
            PathBuf::from("/srv/jobshield/expected_features.json")
        );
        assert_eq!(config.model_path, PathBuf::from("/srv/jobshield/model.onnx"));
    }

    #[test]
    fn test_default_resolves() {
        let config = ArtifactConfig::default();
        assert!(!config.vectorizer_path.as_os_str().is_empty());
        assert!(!config.model_path.as_os_str().is_empty());
    }
}
