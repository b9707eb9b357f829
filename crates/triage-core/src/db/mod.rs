//! Database layer for triage.

mod schema;
mod vocabulary;
mod catalog;
mod doctors;
mod visits;

pub use schema::*;
#[allow(unused_imports)]
pub use vocabulary::*;
#[allow(unused_imports)]
pub use catalog::*;
#[allow(unused_imports)]
pub use doctors::*;
#[allow(unused_imports)]
pub use visits::*;

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        tracing::debug!("store opened");
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Apply an external SQL seed script.
    ///
    /// Callers treat failure as non-fatal: the store keeps whatever state it
    /// already holds.
    pub fn apply_seed_file<P: AsRef<Path>>(&self, path: P) -> DbResult<()> {
        let sql = std::fs::read_to_string(path.as_ref())?;
        self.conn.execute_batch(&sql)?;
        tracing::info!(path = %path.as_ref().display(), "seed script applied");
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_schema_initialized() {
        let db = Database::open_in_memory().unwrap();

        // Check that tables exist
        let tables: Vec<String> = db
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"symptoms".to_string()));
        assert!(tables.contains(&"diseases".to_string()));
        assert!(tables.contains(&"disease_symptoms".to_string()));
        assert!(tables.contains(&"doctors".to_string()));
        assert!(tables.contains(&"patients".to_string()));
        assert!(tables.contains(&"prescriptions".to_string()));
    }

    #[test]
    fn test_apply_seed_file() {
        let db = Database::open_in_memory().unwrap();

        let mut seed = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            seed,
            "INSERT INTO symptoms (name) VALUES ('fever'), ('cough');"
        )
        .unwrap();

        db.apply_seed_file(seed.path()).unwrap();
        assert_eq!(db.count_symptoms().unwrap(), 2);
    }

    #[test]
    fn test_apply_seed_file_missing() {
        let db = Database::open_in_memory().unwrap();
        let result = db.apply_seed_file("/nonexistent/seed.sql");
        assert!(matches!(result, Err(DbError::Io(_))));
    }

    #[test]
    fn test_apply_seed_file_bad_sql() {
        let db = Database::open_in_memory().unwrap();

        let mut seed = tempfile::NamedTempFile::new().unwrap();
        writeln!(seed, "NOT VALID SQL;").unwrap();

        let result = db.apply_seed_file(seed.path());
        assert!(matches!(result, Err(DbError::Sqlite(_))));
    }
}
