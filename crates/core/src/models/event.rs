//! Event and registration models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{blank_as_none, new_id, non_blank, require};
use crate::error::{Error, Result};

/// Lifecycle status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventStatus {
    #[default]
    Upcoming,
    Completed,
    Postponed,
    Preponed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Completed => "Completed",
            EventStatus::Postponed => "Postponed",
            EventStatus::Preponed => "Preponed",
        }
    }

    pub fn all() -> &'static [EventStatus] {
        &[
            EventStatus::Upcoming,
            EventStatus::Completed,
            EventStatus::Postponed,
            EventStatus::Preponed,
        ]
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EventStatus::all()
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown event status '{}'", s)))
    }
}

/// One attendee's sign-up for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub roll_number: String,
    pub year: String,
    pub section: String,
    #[serde(default)]
    pub attended: bool,
    pub registered_at: DateTime<Utc>,
}

/// An imported sign-up, before it is attached to an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    pub name: String,
    pub roll_number: String,
    pub year: String,
    pub section: String,
}

impl NewRegistration {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("roll number", &self.roll_number)?;
        require("year", &self.year)?;
        require("section", &self.section)
    }

    pub fn into_registration(self, event_id: &str, registered_at: DateTime<Utc>) -> Registration {
        Registration {
            id: new_id(),
            event_id: event_id.to_string(),
            name: self.name,
            roll_number: self.roll_number,
            year: self.year,
            section: self.section,
            attended: false,
            registered_at,
        }
    }
}

/// A scheduled activity hosted by a club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub club_id: String,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    /// Free text, e.g. "9:00 AM - 5:00 PM"
    pub timings: String,
    pub description: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub poster_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub certificates_url: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub registrations: Vec<Registration>,
}

impl Event {
    pub fn attendee_count(&self) -> usize {
        self.registrations.iter().filter(|r| r.attended).count()
    }
}

/// Fields supplied by the add-event form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub club_id: String,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub timings: String,
    pub description: String,
    pub poster_url: Option<String>,
    pub registration_url: Option<String>,
}

impl NewEvent {
    pub fn validate(&self) -> Result<()> {
        require("club", &self.club_id)?;
        require("title", &self.title)?;
        require("location", &self.location)?;
        require("timings", &self.timings)?;
        require("description", &self.description)
    }

    /// Status always starts as Upcoming with an empty roster
    pub(crate) fn into_event(self, id: String) -> Event {
        Event {
            id,
            club_id: self.club_id,
            title: self.title,
            date: self.date,
            location: self.location,
            timings: self.timings,
            description: self.description,
            poster_url: non_blank(self.poster_url),
            registration_url: non_blank(self.registration_url),
            certificates_url: None,
            status: EventStatus::Upcoming,
            registrations: Vec::new(),
        }
    }
}
