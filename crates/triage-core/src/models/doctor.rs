//! Doctor directory models.

use serde::{Deserialize, Serialize};

/// A doctor in the directory, keyed by specialization for routing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Store-assigned identifier
    pub doctor_id: i64,
    /// Display name
    pub name: String,
    /// Specialization label, matched case-insensitively
    pub specialization: String,
}
