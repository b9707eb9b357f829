//! Visit orchestration.
//!
//! `run_visit` drives one intake visit over already-opened store state, with
//! every operator decision behind the [`VisitPrompter`] seam so the flow is
//! testable without console I/O. The interactive shell is a thin adapter.

use std::collections::HashSet;

use uuid::Uuid;

use super::{rank, IntakeResult, SymptomNormalizer, SymptomSuggestion};
use crate::db::Database;
use crate::models::{
    Doctor, MatchResult, NewPatient, NewPrescription, UnknownSymptomDecision, VisitOutcome,
};

/// Close-spelling suggestions offered per unknown token.
const MAX_SUGGESTED_SPELLINGS: usize = 3;

/// Operator decision seam for one visit.
pub trait VisitPrompter {
    /// Decide what to do with a token missing from the vocabulary.
    fn on_unknown_symptom(
        &mut self,
        token: &str,
        suggestions: &[SymptomSuggestion],
    ) -> UnknownSymptomDecision;

    /// Pick a candidate from the ranked list by index, or None to skip.
    fn choose_candidate(&mut self, candidates: &[MatchResult]) -> Option<usize>;

    /// Pick a doctor id for the specialization; 0 means unknown.
    fn choose_doctor(&mut self, specialization: &str, doctors: &[Doctor]) -> i64;

    /// Free-text prescription notes.
    fn prescription_notes(&mut self) -> String;
}

/// Run one intake visit.
///
/// The patient is persisted first and survives any later abort; there is no
/// transactional rollback across the visit. Store failures after that point
/// abort only the current visit.
pub fn run_visit(
    db: &Database,
    normalizer: &mut SymptomNormalizer,
    prompter: &mut dyn VisitPrompter,
    patient: &NewPatient,
    symptom_line: &str,
) -> IntakeResult<VisitOutcome> {
    let visit_uid = Uuid::new_v4().to_string();

    let patient_id = db.insert_patient(patient)?;
    tracing::info!(patient_id, visit_uid = %visit_uid, "patient recorded");

    let mut reported: HashSet<i64> = HashSet::new();
    for token in SymptomNormalizer::tokenize(symptom_line) {
        if let Some(symptom_id) = normalizer.lookup(&token) {
            reported.insert(symptom_id);
            continue;
        }

        let suggestions = normalizer.suggestions(&token, MAX_SUGGESTED_SPELLINGS);
        match prompter.on_unknown_symptom(&token, &suggestions) {
            UnknownSymptomDecision::UseExisting(symptom_id) => {
                reported.insert(symptom_id);
            }
            UnknownSymptomDecision::Register => {
                let symptom_id = normalizer.register(db, &token)?;
                tracing::info!(symptom = %token, symptom_id, "registered new symptom");
                reported.insert(symptom_id);
            }
            UnknownSymptomDecision::Skip => {
                tracing::debug!(symptom = %token, "skipped unknown symptom");
            }
        }
    }

    if reported.is_empty() {
        return Ok(VisitOutcome::NoValidSymptoms {
            visit_uid,
            patient_id,
        });
    }

    let catalog = db.list_diseases_with_symptoms()?;
    let candidates = rank(&reported, &catalog);
    if candidates.is_empty() {
        return Ok(VisitOutcome::NoProbableDisease {
            visit_uid,
            patient_id,
        });
    }

    // Out-of-range selections degrade to skip, never to an error.
    let chosen = match prompter.choose_candidate(&candidates) {
        Some(index) if index < candidates.len() => candidates[index].clone(),
        _ => {
            return Ok(VisitOutcome::RankedOnly {
                visit_uid,
                patient_id,
                candidates,
            })
        }
    };

    let doctors = db.find_doctors_by_specialization(&chosen.specialization)?;
    let doctor_id = prompter.choose_doctor(&chosen.specialization, &doctors);
    let notes = prompter.prescription_notes();

    let prescription = db.insert_prescription(&NewPrescription {
        visit_uid: visit_uid.clone(),
        patient_id,
        disease_id: chosen.disease_id,
        doctor_id,
        notes,
    })?;
    tracing::info!(
        prescription_id = prescription.prescription_id,
        disease_id = chosen.disease_id,
        "prescription recorded"
    );

    Ok(VisitOutcome::PrescriptionRecorded {
        visit_uid,
        patient_id,
        candidates,
        prescription,
    })
}
