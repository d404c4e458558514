//! Storage backend trait
//!
//! The store persists each collection as one text document under a fixed
//! key. Any backend that can get and set strings by key will do: SQLite on
//! disk, SQLite in memory, or a plain map in tests.

use crate::error::Result;

/// The five fixed names under which state is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Clubs,
    Events,
    Recruitments,
    Applications,
    IsAdmin,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Clubs => "cbit_clubs",
            StorageKey::Events => "cbit_events",
            StorageKey::Recruitments => "cbit_recruitments",
            StorageKey::Applications => "cbit_applications",
            StorageKey::IsAdmin => "cbit_is_admin",
        }
    }

    pub fn all() -> &'static [StorageKey] {
        &[
            StorageKey::Clubs,
            StorageKey::Events,
            StorageKey::Recruitments,
            StorageKey::Applications,
            StorageKey::IsAdmin,
        ]
    }
}

/// Durable string storage keyed by name
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
