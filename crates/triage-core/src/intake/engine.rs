//! Match & rank engine.
//!
//! Scores each catalog disease by overlap with the reported symptom set and
//! produces a deterministically ordered candidate list. Pure and total: no
//! I/O, no failure path.

use std::collections::HashSet;

use crate::models::{Disease, MatchResult};

/// Rank catalog diseases against a reported symptom set.
///
/// Diseases with an empty symptom set or no overlap with the reported set
/// are excluded. Candidates order by score descending, then match count
/// descending, then disease id ascending. The returned list is unbounded;
/// truncation for presentation is the caller's responsibility.
pub fn rank(reported: &HashSet<i64>, diseases: &[Disease]) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = diseases
        .iter()
        .filter_map(|disease| score(reported, disease))
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.match_count.cmp(&a.match_count))
            .then_with(|| a.disease_id.cmp(&b.disease_id))
    });
    results
}

/// Score one disease, or None when it cannot be a candidate.
fn score(reported: &HashSet<i64>, disease: &Disease) -> Option<MatchResult> {
    let total_symptoms = disease.symptom_count();
    if total_symptoms == 0 {
        return None;
    }

    let match_count = reported
        .iter()
        .filter(|&&symptom_id| disease.has_symptom(symptom_id))
        .count();
    if match_count == 0 {
        return None;
    }

    Some(MatchResult {
        disease_id: disease.disease_id,
        disease_name: disease.name.clone(),
        specialization: disease.specialization.clone(),
        match_count,
        total_symptoms,
        score: 100.0 * match_count as f64 / total_symptoms as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disease(id: i64, name: &str, symptom_ids: &[i64]) -> Disease {
        Disease {
            disease_id: id,
            name: name.into(),
            specialization: "General Medicine".into(),
            symptom_ids: symptom_ids.to_vec(),
        }
    }

    fn reported(ids: &[i64]) -> HashSet<i64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_full_match_excludes_non_matching() {
        // fever=1, cough=2, headache=3
        let catalog = vec![
            disease(1, "Flu", &[1, 2]),
            disease(2, "Migraine", &[3]),
        ];

        let ranked = rank(&reported(&[1, 2]), &catalog);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].disease_name, "Flu");
        assert_eq!(ranked[0].match_count, 2);
        assert_eq!(ranked[0].score, 100.0);
    }

    #[test]
    fn test_partial_match_score() {
        let catalog = vec![disease(1, "Cold", &[1, 2, 3])];

        let ranked = rank(&reported(&[1]), &catalog);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].match_count, 1);
        assert_eq!(ranked[0].total_symptoms, 3);
        assert!((ranked[0].score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_symptom_disease_never_ranked() {
        let catalog = vec![disease(1, "Empty", &[]), disease(2, "Flu", &[1])];

        let ranked = rank(&reported(&[1]), &catalog);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].disease_name, "Flu");
    }

    #[test]
    fn test_order_score_then_matches() {
        let catalog = vec![
            // 2 of 4 = 50%
            disease(1, "Bronchitis", &[1, 2, 4, 5]),
            // 1 of 2 = 50%
            disease(2, "Sinusitis", &[1, 6]),
            // 1 of 1 = 100%
            disease(3, "Fever of Unknown Origin", &[1]),
        ];

        let ranked = rank(&reported(&[1, 2]), &catalog);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].disease_id, 3); // 100%
        assert_eq!(ranked[1].disease_id, 1); // 50%, 2 matches
        assert_eq!(ranked[2].disease_id, 2); // 50%, 1 match
    }

    #[test]
    fn test_tie_breaks_by_disease_id() {
        let catalog = vec![
            disease(7, "Variant B", &[1, 2]),
            disease(3, "Variant A", &[1, 2]),
        ];

        let ranked = rank(&reported(&[1, 2]), &catalog);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].disease_id, 3);
        assert_eq!(ranked[1].disease_id, 7);
    }

    #[test]
    fn test_tied_pair_ranks_above_lower_scores() {
        let catalog = vec![
            disease(1, "Variant A", &[1, 2]),
            disease(2, "Variant B", &[1, 2]),
            disease(3, "Broad", &[1, 2, 3, 4]),
        ];

        let ranked = rank(&reported(&[1, 2]), &catalog);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].disease_id, 1);
        assert_eq!(ranked[1].disease_id, 2);
        assert_eq!(ranked[2].disease_id, 3);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(rank(&reported(&[]), &[disease(1, "Flu", &[1])]).is_empty());
        assert!(rank(&reported(&[1]), &[]).is_empty());
    }
}
