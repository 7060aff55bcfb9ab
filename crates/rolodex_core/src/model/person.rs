//! People tracked by a user, with optional contact details and job history.
//!
//! # Invariants
//! - Optional fields are omitted from the document when `None`.
//! - `job_history` and `attrs` are always serialized, as `[]` when empty.
//! - `JobHistory::company_id` is a soft reference to an `Organization`;
//!   nothing checks that it resolves.

use crate::model::attribute::{Attribute, HasAttributes};
use crate::model::codec::nullable_seq;
use crate::model::document::Document;
use crate::model::ids::{OrganizationId, PersonId, UserId};
use crate::model::validation::{require_id, require_text, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: PersonId,
    pub owner: UserId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub job_history: Vec<JobHistory>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub attrs: Vec<Attribute>,
}

/// Postal address; every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// One past or current position held by a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobHistory {
    #[serde(rename = "companyID")]
    pub company_id: OrganizationId,
    pub title: String,
    /// Free-form date text, stored as entered.
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub attrs: Vec<Attribute>,
}

impl Person {
    pub fn new(owner: UserId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::with_id(PersonId::new(), owner, first_name, last_name)
    }

    pub fn with_id(
        id: PersonId,
        owner: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner,
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: None,
            nick_name: None,
            location: None,
            phone: None,
            email: None,
            address: None,
            job_history: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Display name as `first [middle] last`.
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref() {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Job history entries at `company_id`, in recorded order.
    pub fn jobs_at<'a>(
        &'a self,
        company_id: &'a OrganizationId,
    ) -> impl Iterator<Item = &'a JobHistory> + 'a {
        self.job_history
            .iter()
            .filter(move |job| &job.company_id == company_id)
    }
}

impl JobHistory {
    pub fn new(
        company_id: OrganizationId,
        title: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            company_id,
            title: title.into(),
            start_date: start_date.into(),
            end_date: None,
            attrs: Vec::new(),
        }
    }

    /// Whether the position has no recorded end date.
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}

impl HasAttributes for Person {
    fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attrs
    }
}

impl HasAttributes for JobHistory {
    fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attrs
    }
}

impl Document for Person {
    const COLLECTION: &'static str = "people";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn owner(&self) -> Option<&UserId> {
        Some(&self.owner)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_id(Self::COLLECTION, self.id.as_str())?;
        require_text(Self::COLLECTION, "owner", self.owner.as_str())?;
        require_text(Self::COLLECTION, "firstName", &self.first_name)?;
        require_text(Self::COLLECTION, "lastName", &self.last_name)?;
        for job in &self.job_history {
            require_text(Self::COLLECTION, "jobHistory.companyID", job.company_id.as_str())?;
            require_text(Self::COLLECTION, "jobHistory.title", &job.title)?;
        }
        Ok(())
    }
}
