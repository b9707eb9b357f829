//! Symptom vocabulary models.

use serde::{Deserialize, Serialize};

/// An entry in the canonical symptom vocabulary.
///
/// Symptoms are created on first mention (with operator confirmation) or
/// pre-seeded, and are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Symptom {
    /// Store-assigned identifier
    pub symptom_id: i64,
    /// Canonical name, unique case-insensitively
    pub name: String,
    /// Creation timestamp
    pub created_at: String,
}

impl Symptom {
    /// Get the canonical lookup key (trimmed, lowercase).
    pub fn canonical_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}
