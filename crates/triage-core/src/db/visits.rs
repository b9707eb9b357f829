//! Patient and prescription operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::models::{NewPatient, NewPrescription, Patient, Prescription};

impl Database {
    /// Insert a patient, returning the store-assigned id.
    pub fn insert_patient(&self, patient: &NewPatient) -> DbResult<i64> {
        let created_at = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO patients (name, age, gender, contact, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                patient.name,
                patient.age,
                patient.gender,
                patient.contact,
                created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a patient by id.
    pub fn get_patient(&self, patient_id: i64) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                r#"
                SELECT patient_id, name, age, gender, contact, created_at
                FROM patients
                WHERE patient_id = ?1
                "#,
                [patient_id],
                |row| {
                    Ok(Patient {
                        patient_id: row.get(0)?,
                        name: row.get(1)?,
                        age: row.get(2)?,
                        gender: row.get(3)?,
                        contact: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a prescription and read back the stored row.
    pub fn insert_prescription(&self, rx: &NewPrescription) -> DbResult<Prescription> {
        let created_at = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO prescriptions (visit_uid, patient_id, disease_id, doctor_id, notes, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                rx.visit_uid,
                rx.patient_id,
                rx.disease_id,
                rx.doctor_id,
                rx.notes,
                created_at,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        self.get_prescription(id)?
            .ok_or_else(|| DbError::NotFound(format!("prescription {}", id)))
    }

    /// Get a prescription by id.
    pub fn get_prescription(&self, prescription_id: i64) -> DbResult<Option<Prescription>> {
        self.conn
            .query_row(
                r#"
                SELECT prescription_id, visit_uid, patient_id, disease_id, doctor_id, notes, created_at
                FROM prescriptions
                WHERE prescription_id = ?1
                "#,
                [prescription_id],
                |row| {
                    Ok(Prescription {
                        prescription_id: row.get(0)?,
                        visit_uid: row.get(1)?,
                        patient_id: row.get(2)?,
                        disease_id: row.get(3)?,
                        doctor_id: row.get(4)?,
                        notes: row.get(5)?,
                        created_at: row.get(6)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List prescriptions recorded for a patient, oldest first.
    pub fn list_prescriptions_for_patient(&self, patient_id: i64) -> DbResult<Vec<Prescription>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT prescription_id, visit_uid, patient_id, disease_id, doctor_id, notes, created_at
            FROM prescriptions
            WHERE patient_id = ?1
            ORDER BY prescription_id
            "#,
        )?;

        let rows = stmt.query_map([patient_id], |row| {
            Ok(Prescription {
                prescription_id: row.get(0)?,
                visit_uid: row.get(1)?,
                patient_id: row.get(2)?,
                disease_id: row.get(3)?,
                doctor_id: row.get(4)?,
                notes: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
