//! Club model

use serde::{Deserialize, Serialize};

use super::require;
use crate::error::Result;

/// A contact person listed on a club page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A student club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Image filename or a short glyph
    pub logo: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// Fields supplied when an admin adds a club
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClub {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub contacts: Vec<Contact>,
}

impl NewClub {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("description", &self.description)?;
        require("logo", &self.logo)?;
        for contact in &self.contacts {
            require("contact name", &contact.name)?;
            require("contact phone", &contact.phone)?;
        }
        Ok(())
    }

    pub(crate) fn into_club(self, id: String) -> Club {
        Club {
            id,
            name: self.name,
            description: self.description,
            logo: self.logo,
            contacts: self.contacts,
        }
    }
}
