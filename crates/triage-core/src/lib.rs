//! Triage Core Library
//!
//! Clinical intake engine: a canonical symptom vocabulary, a disease
//! catalog, and a deterministic match & rank engine, backed by SQLite.
//!
//! # Architecture
//!
//! ```text
//! Symptom line → Normalizer → Reported id set → Match & Rank
//!                                                    │
//!                                        Operator selects candidate
//!                                                    │
//!                                      Doctor lookup by specialization
//!                                                    │
//!                                         Prescription recorded
//! ```
//!
//! The normalizer and engine are pure; the store is the only collaborator
//! with a failure surface, and the interactive shell is a thin adapter over
//! [`intake::run_visit`].
//!
//! # Modules
//!
//! - [`db`]: SQLite store (vocabulary, catalog, doctors, visit records)
//! - [`models`]: domain types (Symptom, Disease, MatchResult, ...)
//! - [`intake`]: normalizer, match & rank engine, visit orchestration

pub mod db;
pub mod intake;
pub mod models;

// Re-export commonly used types
pub use db::Database;
pub use intake::{rank, run_visit, IntakeError, SymptomNormalizer, VisitPrompter};
pub use models::{
    Disease, Doctor, MatchResult, NewPatient, Patient, Prescription, Symptom,
    UnknownSymptomDecision, VisitOutcome,
};
