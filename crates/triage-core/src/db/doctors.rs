//! Doctor directory operations.

use rusqlite::params;

use super::{Database, DbResult};
use crate::models::Doctor;

impl Database {
    /// Insert a doctor, returning the store-assigned id.
    pub fn insert_doctor(&self, name: &str, specialization: &str) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO doctors (name, specialization) VALUES (?1, ?2)",
            params![name, specialization],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Find doctors for a specialization label, case-insensitively.
    pub fn find_doctors_by_specialization(&self, specialization: &str) -> DbResult<Vec<Doctor>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT doctor_id, name, specialization
            FROM doctors
            WHERE lower(specialization) = lower(?1)
            ORDER BY doctor_id
            "#,
        )?;

        let rows = stmt.query_map([specialization], |row| {
            Ok(Doctor {
                doctor_id: row.get(0)?,
                name: row.get(1)?,
                specialization: row.get(2)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_find_by_specialization() {
        let db = setup_db();

        let adams = db.insert_doctor("Dr. Adams", "General Medicine").unwrap();
        db.insert_doctor("Dr. Baker", "Neurology").unwrap();

        let doctors = db
            .find_doctors_by_specialization("General Medicine")
            .unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].doctor_id, adams);
        assert_eq!(doctors[0].name, "Dr. Adams");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let db = setup_db();

        db.insert_doctor("Dr. Baker", "Neurology").unwrap();

        let doctors = db.find_doctors_by_specialization("neurology").unwrap();
        assert_eq!(doctors.len(), 1);

        let doctors = db.find_doctors_by_specialization("NEUROLOGY").unwrap();
        assert_eq!(doctors.len(), 1);
    }

    #[test]
    fn test_find_unknown_specialization() {
        let db = setup_db();
        let doctors = db.find_doctors_by_specialization("Cardiology").unwrap();
        assert!(doctors.is_empty());
    }
}
