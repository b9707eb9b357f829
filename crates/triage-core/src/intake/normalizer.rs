//! Symptom normalizer.
//!
//! Maps free-text symptom tokens to canonical vocabulary identifiers,
//! case-insensitively, and proposes close spellings for unknown tokens.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::db::{Database, DbError, DbResult};

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.84;

/// A close-spelling suggestion for an unknown token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomSuggestion {
    pub symptom_id: i64,
    /// Canonical (lowercase) vocabulary name
    pub name: String,
    pub similarity: f64,
}

/// Normalizer owning the in-memory vocabulary for one session.
///
/// The vocabulary is loaded once at session start and appended to when the
/// operator registers an unknown symptom; registrations are visible to the
/// rest of the session.
pub struct SymptomNormalizer {
    /// canonical name -> symptom id
    vocabulary: HashMap<String, i64>,
}

impl SymptomNormalizer {
    /// Load the vocabulary from the store.
    pub fn from_store(db: &Database) -> DbResult<Self> {
        let vocabulary = db
            .list_symptoms()?
            .into_iter()
            .map(|s| (s.canonical_name(), s.symptom_id))
            .collect();
        Ok(Self { vocabulary })
    }

    /// Build a normalizer over an already-known vocabulary.
    pub fn with_vocabulary(vocabulary: HashMap<String, i64>) -> Self {
        Self { vocabulary }
    }

    /// Canonical form of a raw token: trimmed and lowercased. Internal
    /// whitespace is preserved.
    pub fn canonical(token: &str) -> String {
        token.trim().to_lowercase()
    }

    /// Split a comma-separated line into trimmed tokens, dropping empty
    /// segments. Original casing is preserved for registration and display.
    pub fn tokenize(line: &str) -> Vec<String> {
        line.split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Resolve a token against the vocabulary. No mutation.
    pub fn lookup(&self, token: &str) -> Option<i64> {
        self.vocabulary.get(&Self::canonical(token)).copied()
    }

    /// Closest known vocabulary entries for an unknown token, best first;
    /// ties order by name.
    pub fn suggestions(&self, token: &str, limit: usize) -> Vec<SymptomSuggestion> {
        let canonical = Self::canonical(token);
        let mut matches: Vec<SymptomSuggestion> = self
            .vocabulary
            .iter()
            .map(|(name, &symptom_id)| SymptomSuggestion {
                symptom_id,
                name: name.clone(),
                similarity: jaro_winkler(&canonical, name),
            })
            .filter(|s| s.similarity >= SUGGESTION_THRESHOLD)
            .collect();

        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        matches.truncate(limit);
        matches
    }

    /// Register an unknown symptom, preserving the operator's casing. The
    /// store assigns the id and the in-memory vocabulary picks it up. If a
    /// case-variant already exists in the store, its id is returned instead.
    pub fn register(&mut self, db: &Database, token: &str) -> DbResult<i64> {
        let trimmed = token.trim();
        let symptom_id = match db.insert_symptom(trimmed) {
            Ok(id) => id,
            Err(DbError::Constraint(_)) => db
                .lookup_symptom_id(trimmed)?
                .ok_or_else(|| DbError::NotFound(format!("symptom '{}'", trimmed)))?,
            Err(e) => return Err(e),
        };
        self.vocabulary.insert(Self::canonical(token), symptom_id);
        Ok(symptom_id)
    }

    /// Number of vocabulary entries known to this session.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// True when the vocabulary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}
