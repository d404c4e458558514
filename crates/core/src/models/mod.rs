//! Data models for ClubHub

mod application;
mod club;
mod event;
mod recruitment;

pub use application::*;
pub use club::*;
pub use event::*;
pub use recruitment::*;

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Generate a fresh opaque identifier for a new record
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Reject a blank required form field
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

/// Blank optional text counts as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Read an optional link, treating `""` the same as a missing field
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(non_blank)
}
