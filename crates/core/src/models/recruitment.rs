//! Recruitment posting model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::require;
use crate::error::Result;

/// An open position posted by a club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruitment {
    pub id: String,
    pub club_id: String,
    pub position: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub is_active: bool,
}

/// Fields supplied by the add-recruitment form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecruitment {
    pub club_id: String,
    pub position: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub is_active: bool,
}

impl NewRecruitment {
    pub fn validate(&self) -> Result<()> {
        require("club", &self.club_id)?;
        require("position", &self.position)?;
        require("description", &self.description)
    }

    pub(crate) fn into_recruitment(self, id: String) -> Recruitment {
        Recruitment {
            id,
            club_id: self.club_id,
            position: self.position,
            description: self.description,
            deadline: self.deadline,
            is_active: self.is_active,
        }
    }
}
