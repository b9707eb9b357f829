//! SQLite schema definition.

/// Complete database schema for triage.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Symptom Vocabulary
-- ============================================================================

CREATE TABLE IF NOT EXISTS symptoms (
    symptom_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE COLLATE NOCASE,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Disease Catalog
-- ============================================================================

CREATE TABLE IF NOT EXISTS diseases (
    disease_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    specialization TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Many-to-many disease <-> symptom associations; the key makes duplicate
-- associations impossible.
CREATE TABLE IF NOT EXISTS disease_symptoms (
    disease_id INTEGER NOT NULL REFERENCES diseases(disease_id),
    symptom_id INTEGER NOT NULL REFERENCES symptoms(symptom_id),
    PRIMARY KEY (disease_id, symptom_id)
);

CREATE INDEX IF NOT EXISTS idx_disease_symptoms_symptom ON disease_symptoms(symptom_id);

-- ============================================================================
-- Doctor Directory
-- ============================================================================

CREATE TABLE IF NOT EXISTS doctors (
    doctor_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    specialization TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_doctors_specialization ON doctors(specialization);

-- ============================================================================
-- Visit Records
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    patient_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    age INTEGER NOT NULL DEFAULT 0,
    gender TEXT NOT NULL DEFAULT '',
    contact TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Prescriptions reference disease/doctor ids by value; doctor_id 0 means
-- unknown/unspecified.
CREATE TABLE IF NOT EXISTS prescriptions (
    prescription_id INTEGER PRIMARY KEY,
    visit_uid TEXT NOT NULL,
    patient_id INTEGER NOT NULL,
    disease_id INTEGER NOT NULL,
    doctor_id INTEGER NOT NULL DEFAULT 0,
    notes TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_prescriptions_patient ON prescriptions(patient_id);
"#;
