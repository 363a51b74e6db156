//! TF-IDF Vectorizer - Fitted Text Transform
//!
//! Load và áp dụng fitted vectorizer từ training.
//! Transform: lowercase -> tokenize -> term counts -> x IDF -> L2 normalize.
//!
//! Only the fitted state (vocabulary + IDF table) ships as an artifact;
//! fitting happens offline in the training pipeline.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Token pattern: runs of word characters, length >= 2.
/// Must match the training-time tokenizer or term counts drift.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// Fitted TF-IDF vectorizer.
///
/// `vocabulary` maps each term to its column index; `idf` holds the
/// inverse-document-frequency weight per column, both learned at training
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Self {
        Self { vocabulary, idf }
    }

    /// Term -> column index mapping
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF table length (normally equals the vocabulary size)
    pub fn idf_len(&self) -> usize {
        self.idf.len()
    }

    /// Transform text into one numeric value per vocabulary term.
    ///
    /// An empty vocabulary yields an empty vector; out-of-vocabulary
    /// tokens and missing IDF entries contribute nothing. Never fails -
    /// quality degrades instead.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut values = vec![0.0f32; self.vocabulary.len()];
        if values.is_empty() {
            return values;
        }

        let lowered = text.to_lowercase();

        // Term counts
        for token in TOKEN_PATTERN.find_iter(&lowered) {
            if let Some(&index) = self.vocabulary.get(token.as_str()) {
                if index < values.len() {
                    values[index] += 1.0;
                }
            }
        }

        // Apply IDF weights
        for (index, value) in values.iter_mut().enumerate() {
            *value *= self.idf.get(index).copied().unwrap_or(0.0);
        }

        // L2 normalize
        let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut values {
                *value /= norm;
            }
        }

        values
    }

    /// Vocabulary terms ordered by column index.
    pub fn feature_names(&self) -> Vec<&str> {
        let mut names = vec![""; self.vocabulary.len()];
        for (term, &index) in &self.vocabulary {
            if index < names.len() {
                names[index] = term.as_str();
            }
        }
        names
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> TfidfVectorizer {
        let vocabulary = HashMap::from([
            ("money".to_string(), 0),
            ("experience".to_string(), 1),
            ("salary".to_string(), 2),
        ]);
        TfidfVectorizer::new(vocabulary, vec![1.0, 2.0, 1.5])
    }

    #[test]
    fn test_transform_counts_and_weights() {
        let v = vectorizer();
        let values = v.transform("money money experience");

        // money: 2 * 1.0, experience: 1 * 2.0, salary: 0
        let norm = (4.0f32 + 4.0).sqrt();
        assert!((values[0] - 2.0 / norm).abs() < 1e-6);
        assert!((values[1] - 2.0 / norm).abs() < 1e-6);
        assert_eq!(values[2], 0.0);
    }

    #[test]
    fn test_transform_is_lowercased() {
        let v = vectorizer();
        let upper = v.transform("MONEY");
        let lower = v.transform("money");
        assert_eq!(upper, lower);
        assert!(upper[0] > 0.0);
    }

    #[test]
    fn test_transform_empty_text() {
        let v = vectorizer();
        assert!(v.transform("").iter().all(|&x| x == 0.0));
        assert!(v.transform("   ").iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_transform_l2_norm_is_unit() {
        let v = vectorizer();
        let values = v.transform("money experience salary");
        let norm = values.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_single_char_tokens_are_skipped() {
        let vocabulary = HashMap::from([("a".to_string(), 0)]);
        let v = TfidfVectorizer::new(vocabulary, vec![1.0]);
        // Token pattern requires length >= 2, so "a" never matches
        assert_eq!(v.transform("a a a"), vec![0.0]);
    }

    #[test]
    fn test_empty_vocabulary_degrades() {
        let v = TfidfVectorizer::new(HashMap::new(), vec![]);
        assert!(v.transform("anything at all").is_empty());
    }

    #[test]
    fn test_missing_idf_entry_contributes_zero() {
        let vocabulary = HashMap::from([
            ("money".to_string(), 0),
            ("salary".to_string(), 1),
        ]);
        // IDF table shorter than vocabulary
        let v = TfidfVectorizer::new(vocabulary, vec![1.0]);
        let values = v.transform("money salary");
        assert!(values[0] > 0.0);
        assert_eq!(values[1], 0.0);
    }

    #[test]
    fn test_feature_names_ordered_by_index() {
        let v = vectorizer();
        assert_eq!(v.feature_names(), vec!["money", "experience", "salary"]);
    }
}
