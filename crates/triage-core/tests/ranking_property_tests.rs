//! Property tests for the match & rank engine.

use std::collections::HashSet;

use proptest::prelude::*;

use triage_core::intake::rank;
use triage_core::models::Disease;

/// A small universe of symptom ids keeps intersections common enough to
/// exercise the ranking paths.
const SYMPTOM_UNIVERSE: i64 = 20;

fn arb_symptom_set() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::hash_set(1..=SYMPTOM_UNIVERSE, 0..8)
        .prop_map(|set| set.into_iter().collect::<Vec<i64>>())
}

fn arb_catalog() -> impl Strategy<Value = Vec<Disease>> {
    proptest::collection::vec(arb_symptom_set(), 0..12).prop_map(|sets| {
        sets.into_iter()
            .enumerate()
            .map(|(i, symptom_ids)| Disease {
                disease_id: i as i64 + 1,
                name: format!("Disease {}", i + 1),
                specialization: "General Medicine".into(),
                symptom_ids,
            })
            .collect::<Vec<Disease>>()
    })
}

fn arb_reported() -> impl Strategy<Value = HashSet<i64>> {
    proptest::collection::hash_set(1..=SYMPTOM_UNIVERSE, 0..8)
}

proptest! {
    #[test]
    fn match_count_bounded_and_score_exact(
        reported in arb_reported(),
        catalog in arb_catalog(),
    ) {
        for result in rank(&reported, &catalog) {
            prop_assert!(result.match_count >= 1);
            prop_assert!(result.match_count <= result.total_symptoms);
            prop_assert!(result.total_symptoms >= 1);

            let expected =
                100.0 * result.match_count as f64 / result.total_symptoms as f64;
            prop_assert!((result.score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn exclusions_and_completeness(
        reported in arb_reported(),
        catalog in arb_catalog(),
    ) {
        let ranked = rank(&reported, &catalog);
        let ranked_ids: HashSet<i64> = ranked.iter().map(|r| r.disease_id).collect();

        for disease in &catalog {
            let overlap = disease
                .symptom_ids
                .iter()
                .filter(|id| reported.contains(id))
                .count();
            let is_candidate = !disease.symptom_ids.is_empty() && overlap > 0;
            prop_assert_eq!(
                ranked_ids.contains(&disease.disease_id),
                is_candidate,
                "disease {} candidacy mismatch (overlap {})",
                disease.disease_id,
                overlap
            );
        }
    }

    #[test]
    fn output_is_sorted_deterministically(
        reported in arb_reported(),
        catalog in arb_catalog(),
    ) {
        let ranked = rank(&reported, &catalog);

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let in_order = a.score > b.score
                || (a.score == b.score && a.match_count > b.match_count)
                || (a.score == b.score
                    && a.match_count == b.match_count
                    && a.disease_id <= b.disease_id);
            prop_assert!(in_order, "out of order: {:?} before {:?}", a, b);
        }

        // Same inputs, same output
        prop_assert_eq!(rank(&reported, &catalog), ranked);
    }
}
