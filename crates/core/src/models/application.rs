//! Recruitment application model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::require;
use crate::error::Result;

/// A student's submission against one recruitment posting.
///
/// Applications are append-only. `club_id` is copied from the recruitment
/// at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub recruitment_id: String,
    pub club_id: String,
    pub name: String,
    pub roll_number: String,
    pub section: String,
    pub year: String,
    pub branch: String,
    pub submitted_at: DateTime<Utc>,
}

/// Fields supplied by the apply form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewApplication {
    pub recruitment_id: String,
    pub name: String,
    pub roll_number: String,
    pub section: String,
    pub year: String,
    pub branch: String,
}

impl NewApplication {
    pub fn validate(&self) -> Result<()> {
        require("recruitment", &self.recruitment_id)?;
        require("name", &self.name)?;
        require("roll number", &self.roll_number)?;
        require("section", &self.section)?;
        require("year", &self.year)?;
        require("branch", &self.branch)
    }

    pub(crate) fn into_application(
        self,
        id: String,
        club_id: String,
        submitted_at: DateTime<Utc>,
    ) -> Application {
        Application {
            id,
            recruitment_id: self.recruitment_id,
            club_id,
            name: self.name,
            roll_number: self.roll_number,
            section: self.section,
            year: self.year,
            branch: self.branch,
            submitted_at,
        }
    }
}
