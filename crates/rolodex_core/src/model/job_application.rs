//! Job applications tracked by a user.
//!
//! # Invariants
//! - `company_name` is a denormalized copy kept for display; it is not
//!   derived from, nor synchronized with, the referenced organization.
//! - `event_ids` and `people` are always serialized, as `[]` when empty.

use crate::model::attribute::{Attribute, HasAttributes};
use crate::model::codec::nullable_seq;
use crate::model::document::Document;
use crate::model::ids::{EventId, JobApplicationId, OrganizationId, PersonId, UserId};
use crate::model::validation::{require_id, require_text, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(rename = "_id")]
    pub id: JobApplicationId,
    pub owner: UserId,
    pub job_title: String,
    #[serde(rename = "companyID")]
    pub company_id: OrganizationId,
    pub company_name: String,
    pub notes: String,
    #[serde(rename = "eventIDs", default, deserialize_with = "nullable_seq")]
    pub event_ids: Vec<EventId>,
    /// Hiring managers, recruiters, other applicants.
    #[serde(default, deserialize_with = "nullable_seq")]
    pub people: Vec<PersonId>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub attrs: Vec<Attribute>,
}

impl JobApplication {
    pub fn new(
        owner: UserId,
        job_title: impl Into<String>,
        company_id: OrganizationId,
        company_name: impl Into<String>,
    ) -> Self {
        Self::with_id(
            JobApplicationId::new(),
            owner,
            job_title,
            company_id,
            company_name,
        )
    }

    pub fn with_id(
        id: JobApplicationId,
        owner: UserId,
        job_title: impl Into<String>,
        company_id: OrganizationId,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner,
            job_title: job_title.into(),
            company_id,
            company_name: company_name.into(),
            notes: String::new(),
            event_ids: Vec::new(),
            people: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Appends `event_id` unless already linked. Returns whether it was added.
    pub fn link_event(&mut self, event_id: EventId) -> bool {
        if self.event_ids.contains(&event_id) {
            return false;
        }
        self.event_ids.push(event_id);
        true
    }

    /// Appends `person_id` unless already linked. Returns whether it was added.
    pub fn link_person(&mut self, person_id: PersonId) -> bool {
        if self.people.contains(&person_id) {
            return false;
        }
        self.people.push(person_id);
        true
    }
}

impl HasAttributes for JobApplication {
    fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attrs
    }
}

impl Document for JobApplication {
    const COLLECTION: &'static str = "job_applications";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn owner(&self) -> Option<&UserId> {
        Some(&self.owner)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_id(Self::COLLECTION, self.id.as_str())?;
        require_text(Self::COLLECTION, "owner", self.owner.as_str())?;
        require_text(Self::COLLECTION, "jobTitle", &self.job_title)?;
        require_text(Self::COLLECTION, "companyID", self.company_id.as_str())
    }
}
