//! Symptom vocabulary operations.

use rusqlite::OptionalExtension;

use super::{Database, DbError, DbResult};
use crate::models::Symptom;

impl Database {
    /// Look up a symptom id by name. The name column is NOCASE, so the
    /// match is case-insensitive.
    pub fn lookup_symptom_id(&self, name: &str) -> DbResult<Option<i64>> {
        self.conn
            .query_row(
                "SELECT symptom_id FROM symptoms WHERE name = ?1",
                [name],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a new symptom, returning the store-assigned id.
    pub fn insert_symptom(&self, name: &str) -> DbResult<i64> {
        let created_at = chrono::Utc::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO symptoms (name, created_at) VALUES (?1, ?2)",
                rusqlite::params![name, created_at],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    DbError::Constraint(format!("symptom '{}' already exists", name))
                }
                other => DbError::Sqlite(other),
            })?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Load the whole vocabulary.
    pub fn list_symptoms(&self) -> DbResult<Vec<Symptom>> {
        let mut stmt = self.conn.prepare(
            "SELECT symptom_id, name, created_at FROM symptoms ORDER BY symptom_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Symptom {
                symptom_id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Number of vocabulary entries.
    pub fn count_symptoms(&self) -> DbResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM symptoms", [], |row| row.get(0))
            .map_err(Into::into)
    }
}
