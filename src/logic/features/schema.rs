//! Feature Schema - Expected Column List
//!
//! **CRITICAL: the schema controls the feature order**
//!
//! The classifier was trained on a positional feature matrix, so every
//! assembled row MUST follow the column order the schema defines. The
//! column list is loaded from the expected-features artifact at startup
//! and never changes for the process lifetime.

use std::collections::HashMap;

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// SCHEMA
// ============================================================================

/// Ordered expected-column list with index lookup.
///
/// This is the SINGLE SOURCE OF TRUTH for feature ordering at inference
/// time. Rows are stamped with `hash()` so a row built against a stale
/// schema is detectable.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    hash: u32,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        let hash = compute_schema_hash(&columns);
        Self { columns, index, hash }
    }

    /// Number of expected columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in training order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// CRC32 hash over the ordered column names
    pub fn hash(&self) -> u32 {
        self.hash
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Get column name by index
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|s| s.as_str())
    }
}

/// Compute CRC32 hash of an ordered column list
///
/// Used to detect schema mismatches between a row and the schema it was
/// assembled against.
pub fn compute_schema_hash(columns: &[String]) -> u32 {
    let mut hasher = Hasher::new();

    for name in columns {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

// ============================================================================
// SCHEMA INFO
// ============================================================================

/// Complete schema information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaInfo {
    pub hash: u32,
    pub column_count: usize,
    pub column_names: Vec<String>,
}

impl SchemaInfo {
    pub fn of(schema: &FeatureSchema) -> Self {
        Self {
            hash: schema.hash(),
            column_count: schema.len(),
            column_names: schema.columns().to_vec(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureSchema {
        FeatureSchema::new(vec![
            "telecommuting".to_string(),
            "has_company_logo".to_string(),
            "money".to_string(),
        ])
    }

    #[test]
    fn test_schema_len_and_order() {
        let schema = sample();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.column_name(0), Some("telecommuting"));
        assert_eq!(schema.column_name(2), Some("money"));
        assert_eq!(schema.column_name(3), None);
    }

    #[test]
    fn test_column_index() {
        let schema = sample();
        assert_eq!(schema.column_index("telecommuting"), Some(0));
        assert_eq!(schema.column_index("money"), Some(2));
        assert_eq!(schema.column_index("nonexistent"), None);
    }

    #[test]
    fn test_hash_consistency() {
        // Hash should be consistent across identical column lists
        let a = sample();
        let b = sample();
        assert_eq!(a.hash(), b.hash());
        assert_ne!(a.hash(), 0);
    }

    #[test]
    fn test_hash_depends_on_order() {
        let a = FeatureSchema::new(vec!["x".to_string(), "y".to_string()]);
        let b = FeatureSchema::new(vec!["y".to_string(), "x".to_string()]);
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_empty_schema_is_valid() {
        let schema = FeatureSchema::new(vec![]);
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }

    #[test]
    fn test_schema_info() {
        let schema = sample();
        let info = SchemaInfo::of(&schema);
        assert_eq!(info.hash, schema.hash());
        assert_eq!(info.column_count, 3);
        assert_eq!(info.column_names.len(), 3);
    }
}
