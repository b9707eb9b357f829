//! Disease catalog models.

use serde::{Deserialize, Serialize};

/// A single entry in the disease catalog.
///
/// Immutable for the duration of a session once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Disease {
    /// Store-assigned identifier
    pub disease_id: i64,
    /// Display name
    pub name: String,
    /// Routing label used to find doctors qualified to treat it
    pub specialization: String,
    /// Associated symptom identifiers (unordered)
    pub symptom_ids: Vec<i64>,
}

impl Disease {
    /// Number of symptoms associated with this disease.
    pub fn symptom_count(&self) -> usize {
        self.symptom_ids.len()
    }

    /// Check whether a symptom belongs to this disease's set.
    pub fn has_symptom(&self, symptom_id: i64) -> bool {
        self.symptom_ids.contains(&symptom_id)
    }
}
