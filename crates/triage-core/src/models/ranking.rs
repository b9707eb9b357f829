//! Ranking models for the match engine.

use serde::{Deserialize, Serialize};

/// A candidate diagnosis produced by the match & rank engine.
///
/// Derived, never persisted; one instance per disease sharing at least one
/// reported symptom, alive for a single ranking call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Catalog disease identifier
    pub disease_id: i64,
    /// Disease display name
    pub disease_name: String,
    /// Specialization label for doctor routing
    pub specialization: String,
    /// Reported symptoms also present in the disease's set
    pub match_count: usize,
    /// Size of the disease's symptom set
    pub total_symptoms: usize,
    /// 100 * match_count / total_symptoms
    pub score: f64,
}
