//! Patient models.

use serde::{Deserialize, Serialize};

/// Patient fields collected during intake, before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
}

/// A persisted patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Store-assigned identifier
    pub patient_id: i64,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    /// Creation timestamp
    pub created_at: String,
}
