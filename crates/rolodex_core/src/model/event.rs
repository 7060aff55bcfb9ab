//! Events recorded by a user: meetings, club events, coffee, birthdays.
//!
//! Events carry no explicit person/organization references; association
//! happens through `JobApplication::event_ids` or attributes.

use crate::model::attribute::{Attribute, HasAttributes};
use crate::model::codec::nullable_seq;
use crate::model::document::Document;
use crate::model::ids::{EventId, UserId};
use crate::model::validation::{require_id, require_text, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: EventId,
    pub owner: UserId,
    pub name: String,
    /// Free-form date text, stored as entered.
    pub date: String,
    pub notes: String,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub attrs: Vec<Attribute>,
}

impl Event {
    pub fn new(
        owner: UserId,
        name: impl Into<String>,
        date: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self::with_id(EventId::new(), owner, name, date, notes)
    }

    pub fn with_id(
        id: EventId,
        owner: UserId,
        name: impl Into<String>,
        date: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner,
            name: name.into(),
            date: date.into(),
            notes: notes.into(),
            attrs: Vec::new(),
        }
    }
}

impl HasAttributes for Event {
    fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attrs
    }
}

impl Document for Event {
    const COLLECTION: &'static str = "events";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn owner(&self) -> Option<&UserId> {
        Some(&self.owner)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_id(Self::COLLECTION, self.id.as_str())?;
        require_text(Self::COLLECTION, "owner", self.owner.as_str())?;
        require_text(Self::COLLECTION, "name", &self.name)
    }
}
