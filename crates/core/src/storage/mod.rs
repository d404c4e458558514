//! SQLite storage layer for ClubHub

mod entries;
mod memory;
mod migrations;
mod traits;

use std::path::Path;

use rusqlite::Connection;
use tracing::instrument;

use crate::error::Result;

pub use entries::EntryStore;
pub use memory::MemoryStorage;
pub use traits::{KeyValueStore, StorageKey};

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        migrations::applied_version(&self.conn).unwrap_or(0)
    }

    /// Get the key/value entry store
    pub fn entries(&self) -> EntryStore<'_> {
        EntryStore::new(&self.conn)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.conn.path())
            .finish()
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.entries().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_schema_version_after_open() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.schema_version(), 1);
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clubhub.db");

        {
            let db = Database::open(&path).unwrap();
            db.set(StorageKey::IsAdmin.as_str(), "true").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(
            db.get(StorageKey::IsAdmin.as_str()).unwrap().as_deref(),
            Some("true")
        );
    }
}
