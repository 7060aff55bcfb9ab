//! Organizations (companies, clubs, ...) tracked by a user.

use crate::model::attribute::{Attribute, HasAttributes};
use crate::model::codec::nullable_seq;
use crate::model::document::Document;
use crate::model::ids::{OrganizationId, UserId};
use crate::model::validation::{require_id, require_text, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "_id")]
    pub id: OrganizationId,
    pub owner: UserId,
    pub name: String,
    pub location: String,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub attrs: Vec<Attribute>,
}

impl Organization {
    pub fn new(owner: UserId, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self::with_id(OrganizationId::new(), owner, name, location)
    }

    pub fn with_id(
        id: OrganizationId,
        owner: UserId,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner,
            name: name.into(),
            location: location.into(),
            attrs: Vec::new(),
        }
    }
}

impl HasAttributes for Organization {
    fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attrs
    }
}

impl Document for Organization {
    const COLLECTION: &'static str = "organizations";

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
