//! Disease catalog operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::Disease;

impl Database {
    /// Insert a disease with its associated symptom set, returning the
    /// store-assigned id. The disease row and its associations commit
    /// together.
    pub fn insert_disease(
        &mut self,
        name: &str,
        specialization: &str,
        symptom_ids: &[i64],
    ) -> DbResult<i64> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO diseases (name, specialization) VALUES (?1, ?2)",
            params![name, specialization],
        )?;
        let disease_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO disease_symptoms (disease_id, symptom_id) VALUES (?1, ?2)",
            )?;
            for symptom_id in symptom_ids {
                stmt.execute(params![disease_id, symptom_id])?;
            }
        }

        tx.commit()?;
        Ok(disease_id)
    }

    /// Get a disease with its symptom set.
    pub fn get_disease(&self, disease_id: i64) -> DbResult<Option<Disease>> {
        let disease = self
            .conn
            .query_row(
                "SELECT disease_id, name, specialization FROM diseases WHERE disease_id = ?1",
                [disease_id],
                |row| {
                    Ok(Disease {
                        disease_id: row.get(0)?,
                        name: row.get(1)?,
                        specialization: row.get(2)?,
                        symptom_ids: Vec::new(),
                    })
                },
            )
            .optional()?;

        match disease {
            Some(mut d) => {
                d.symptom_ids = self.disease_symptom_ids(d.disease_id)?;
                Ok(Some(d))
            }
            None => Ok(None),
        }
    }

    /// Load the full catalog with symptom sets, ordered by disease id.
    pub fn list_diseases_with_symptoms(&self) -> DbResult<Vec<Disease>> {
        let mut stmt = self.conn.prepare(
            "SELECT disease_id, name, specialization FROM diseases ORDER BY disease_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Disease {
                disease_id: row.get(0)?,
                name: row.get(1)?,
                specialization: row.get(2)?,
                symptom_ids: Vec::new(),
            })
        })?;

        let mut diseases = rows.collect::<Result<Vec<_>, _>>()?;
        for disease in &mut diseases {
            disease.symptom_ids = self.disease_symptom_ids(disease.disease_id)?;
        }
        Ok(diseases)
    }

    fn disease_symptom_ids(&self, disease_id: i64) -> DbResult<Vec<i64>> {
        let mut stmt = self.conn.prepare(
            "SELECT symptom_id FROM disease_symptoms WHERE disease_id = ?1 ORDER BY symptom_id",
        )?;
        let rows = stmt.query_map([disease_id], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
