//! Person model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Document;

/// Person entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl Person {
    /// Create an unsaved person stamped with the current time
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
            created_at: Utc::now(),
        }
    }
}

impl Document for Person {
    const COLLECTION: &'static str = "people";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Person creation payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewPerson {
    pub name: String,
    pub location: String,
}

impl From<NewPerson> for Person {
    fn from(payload: NewPerson) -> Self {
        Person::new(payload.name, payload.location)
    }
}
