//! Symptom intake pipeline.
//!
//! Pipeline: Symptom line → Normalization → Match & Rank → Operator selection
//! → Prescription

mod engine;
mod normalizer;
mod visit;

pub use engine::*;
pub use normalizer::*;
pub use visit::*;

use thiserror::Error;

/// Intake errors.
///
/// The normalizer and engine are pure; every failure surface is a store
/// operation made on behalf of the visit.
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Database error: {0}")]
    Db(#[from] crate::db::DbError),
}

pub type IntakeResult<T> = Result<T, IntakeError>;
