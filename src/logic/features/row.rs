//! Feature Row - Core data structure for classifier input
//!
//! **Schema-aligned feature row with mismatch detection**
//!
//! Uses the loaded schema from `schema.rs` for:
//! - Consistent feature ordering
//! - Schema hash for compatibility checks

use serde::{Deserialize, Serialize};

use super::schema::FeatureSchema;

// ============================================================================
// FEATURE ROW
// ============================================================================

/// One classifier input row, aligned to the schema column order.
///
/// This struct MUST be used for all feature data - never hand the model a
/// raw `Vec<f32>` that skipped schema projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRow {
    /// CRC32 hash of the schema this row was assembled against
    pub schema_hash: u32,
    /// Feature values in schema column order
    pub values: Vec<f32>,
}

impl FeatureRow {
    /// Create a zeroed row aligned to the schema
    pub fn zeroed(schema: &FeatureSchema) -> Self {
        Self {
            schema_hash: schema.hash(),
            values: vec![0.0; schema.len()],
        }
    }

    /// Create from values already in schema order (truncates or pads if
    /// the length is off)
    pub fn from_values(schema: &FeatureSchema, values: Vec<f32>) -> Self {
        let mut aligned = vec![0.0f32; schema.len()];
        for (i, v) in values.into_iter().take(schema.len()).enumerate() {
            aligned[i] = v;
        }
        Self {
            schema_hash: schema.hash(),
            values: aligned,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, schema: &FeatureSchema, name: &str) -> Option<f32> {
        schema.column_index(name).and_then(|i| self.get(i))
    }

    /// Set feature by index
    pub fn set(&mut self, index: usize, value: f32) {
        if index < self.values.len() {
            self.values[index] = value;
        }
    }

    /// Check that this row was assembled against the given schema
    pub fn matches(&self, schema: &FeatureSchema) -> bool {
        self.schema_hash == schema.hash() && self.values.len() == schema.len()
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self, schema: &FeatureSchema) -> serde_json::Value {
        serde_json::json!({
            "schema_hash": self.schema_hash,
            "values": self.values,
            "named_values": schema.columns().iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.clone(), *value))
                .collect::<std::collections::HashMap<_, _>>(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
