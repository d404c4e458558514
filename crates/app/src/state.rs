//! Application state management

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Local, NaiveDate};
use clubhub_core::{AppStore, Config, Database, Error, Result};

pub type Store = AppStore<Database>;

/// Main application state
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
    pub config: Config,
    data_dir: PathBuf,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let data_dir = config.data_dir()?;
        std::fs::create_dir_all(&data_dir)?;

        let db_path = config.database_path()?;
        tracing::debug!(path = %db_path.display(), "Opening database");

        let db = Database::open(&db_path)?;
        let store = AppStore::open(db, config.admin.clone())?;

        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            config,
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Fail unless an admin session is active
    pub fn require_admin(&self) -> Result<()> {
        if self.store().is_admin() {
            Ok(())
        } else {
            Err(Error::PermissionDenied(
                "admin login required (run `clubhub login`)".into(),
            ))
        }
    }

    /// Today's date on the local calendar, for upcoming/past splits
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use tempfile::TempDir;

    /// State backed by a fresh database in a temp directory
    pub fn temp_state() -> (TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.data_dir = Some(dir.path().to_path_buf());
        let state = AppState::new(config).unwrap();
        (dir, state)
    }

    pub fn admin_state() -> (TempDir, AppState) {
        let (dir, state) = temp_state();
        assert!(state.store().login("admin", "admin123").unwrap());
        (dir, state)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;

    #[test]
    fn test_new_state_seeds_clubs() {
        let (dir, state) = temp_state();
        assert_eq!(state.store().clubs().len(), 10);
        assert!(dir.path().join("clubhub.db").exists());
        assert_eq!(state.data_dir(), dir.path());
    }

    #[test]
    fn test_require_admin() {
        let (_dir, state) = temp_state();
        assert!(state.require_admin().is_err());
        state.store().login("admin", "admin123").unwrap();
        assert!(state.require_admin().is_ok());
    }
}
