//! Visit records and outcomes.

use serde::{Deserialize, Serialize};

use super::ranking::MatchResult;

/// Doctor id recorded when no doctor was chosen or known.
pub const UNKNOWN_DOCTOR: i64 = 0;

/// Prescription fields collected during a visit, before the store assigns
/// an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPrescription {
    /// Tag linking the prescription to the visit that produced it
    pub visit_uid: String,
    pub patient_id: i64,
    pub disease_id: i64,
    /// Referenced by value; [`UNKNOWN_DOCTOR`] when unspecified
    pub doctor_id: i64,
    /// Free-text notes from the operator
    pub notes: String,
}

/// A persisted prescription record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    /// Store-assigned identifier
    pub prescription_id: i64,
    pub visit_uid: String,
    pub patient_id: i64,
    pub disease_id: i64,
    pub doctor_id: i64,
    pub notes: String,
    /// Creation timestamp
    pub created_at: String,
}

/// Operator decision for a token missing from the vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum UnknownSymptomDecision {
    /// Use an already-registered symptom (picked from suggestions)
    UseExisting(i64),
    /// Register the token as a new symptom
    Register,
    /// Drop the token from the reported set; an omission, not a failure
    Skip,
}

/// Structured outcome of one intake visit.
///
/// The patient row is persisted before any of these are produced, so every
/// variant carries the store-assigned patient id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VisitOutcome {
    /// Every token was unknown and declined; the engine never ran
    NoValidSymptoms { visit_uid: String, patient_id: i64 },
    /// No catalog disease shares a symptom with the reported set
    NoProbableDisease { visit_uid: String, patient_id: i64 },
    /// Candidates were ranked but the operator declined to record a
    /// prescription
    RankedOnly {
        visit_uid: String,
        patient_id: i64,
        candidates: Vec<MatchResult>,
    },
    /// A prescription was recorded against the chosen candidate
    PrescriptionRecorded {
        visit_uid: String,
        patient_id: i64,
        candidates: Vec<MatchResult>,
        prescription: Prescription,
    },
}

impl VisitOutcome {
    /// The patient persisted for this visit.
    pub fn patient_id(&self) -> i64 {
        match self {
            VisitOutcome::NoValidSymptoms { patient_id, .. }
            | VisitOutcome::NoProbableDisease { patient_id, .. }
            | VisitOutcome::RankedOnly { patient_id, .. }
            | VisitOutcome::PrescriptionRecorded { patient_id, .. } => *patient_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_id_accessor() {
        let outcome = VisitOutcome::NoValidSymptoms {
            visit_uid: "v-1".into(),
            patient_id: 7,
        };
        assert_eq!(outcome.patient_id(), 7);
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = VisitOutcome::NoProbableDisease {
            visit_uid: "v-1".into(),
            patient_id: 3,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: VisitOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
