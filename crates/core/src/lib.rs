//! ClubHub Core Library
//!
//! Models, durable storage, the application state store, and the read-side
//! queries behind the CBIT clubs and events directory.

pub mod attendance;
pub mod config;
pub mod directory;
pub mod error;
pub mod invariants;
pub mod models;
pub mod seed;
pub mod storage;
pub mod store;

pub use attendance::{AttendanceReport, AttendanceSheet};
pub use config::{AdminCredential, Config, ListingConfig, StorageConfig};
pub use error::{Error, Result};
pub use models::*;
pub use storage::{Database, EntryStore, KeyValueStore, MemoryStorage, StorageKey};
pub use store::{AppStore, StoreState, Subscription, Topic};
