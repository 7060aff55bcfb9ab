//! Contact-management use-case service.
//!
//! # Responsibility
//! - Provide stable create/link/update entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Every owned read or write goes through the caller's `UserId` partition.
//! - `company_name` on job applications is copied from caller input and never
//!   refreshed from the referenced organization.
//! - Referenced ids (companies, events, people) are not resolved.
//! - Log lines carry collection and id only, never document contents.

use crate::model::document::Document;
use crate::model::event::Event;
use crate::model::ids::{EventId, JobApplicationId, OrganizationId, PersonId, UserId};
use crate::model::job_application::JobApplication;
use crate::model::organization::Organization;
use crate::model::person::{JobHistory, Person};
use crate::model::user::User;
use crate::repo::document_repo::{DocumentRepository, ListQuery, RepoError, RepoResult};
use log::info;

/// Use-case service wrapper over a document repository.
pub struct RolodexService<R: DocumentRepository> {
    repo: R,
}

/// Request model for tracking a new job application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJobApplication {
    pub job_title: String,
    pub company_id: OrganizationId,
    /// Stored as-is next to `company_id`.
    pub company_name: String,
    pub notes: String,
}

impl<R: DocumentRepository> RolodexService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new account holder.
    pub fn register_user(
        &self,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> RepoResult<UserId> {
        let user = User::new(email, first_name, last_name);
        self.create(&user)?;
        Ok(user.id)
    }

    pub fn get_user(&self, id: &UserId) -> RepoResult<Option<User>> {
        self.repo.get(id.as_str())
    }

    pub fn add_organization(
        &self,
        owner: &UserId,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> RepoResult<OrganizationId> {
        let organization = Organization::new(owner.clone(), name, location);
        self.create(&organization)?;
        Ok(organization.id)
    }

    /// Creates a person with only the required name fields set.
    ///
    /// Optional details are added later through `save`.
    pub fn add_person(
        &self,
        owner: &UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> RepoResult<PersonId> {
        let person = Person::new(owner.clone(), first_name, last_name);
        self.create(&person)?;
        Ok(person.id)
    }

    pub fn record_event(
        &self,
        owner: &UserId,
        name: impl Into<String>,
        date: impl Into<String>,
        notes: impl Into<String>,
    ) -> RepoResult<EventId> {
        let event = Event::new(owner.clone(), name, date, notes);
        self.create(&event)?;
        Ok(event.id)
    }

    /// Creates a job application with empty event/person links.
    pub fn track_job_application(
        &self,
        owner: &UserId,
        request: &NewJobApplication,
    ) -> RepoResult<JobApplicationId> {
        let mut application = JobApplication::new(
            owner.clone(),
            request.job_title.clone(),
            request.company_id.clone(),
            request.company_name.clone(),
        );
        application.notes = request.notes.clone();
        self.create(&application)?;
        Ok(application.id)
    }

    /// Appends a job history entry to one of `owner`'s people.
    pub fn add_job_history(
        &self,
        owner: &UserId,
        person_id: &PersonId,
        job: JobHistory,
    ) -> RepoResult<()> {
        let mut person = self.require_owned::<Person>(owner, person_id.as_str())?;
        person.job_history.push(job);
        self.save(&person)
    }

    /// Links an event to an application. Returns `false` if already linked.
    pub fn link_event_to_application(
        &self,
        owner: &UserId,
        application_id: &JobApplicationId,
        event_id: EventId,
    ) -> RepoResult<bool> {
        let mut application =
            self.require_owned::<JobApplication>(owner, application_id.as_str())?;
        if !application.link_event(event_id) {
            return Ok(false);
        }
        self.save(&application)?;
        Ok(true)
    }

    /// Links a person to an application. Returns `false` if already linked.
    pub fn link_person_to_application(
        &self,
        owner: &UserId,
        application_id: &JobApplicationId,
        person_id: PersonId,
    ) -> RepoResult<bool> {
        let mut application =
            self.require_owned::<JobApplication>(owner, application_id.as_str())?;
        if !application.link_person(person_id) {
            return Ok(false);
        }
        self.save(&application)?;
        Ok(true)
    }

    /// Replaces a stored document with `doc`.
    pub fn save<D: Document>(&self, doc: &D) -> RepoResult<()> {
        self.repo.replace(doc)?;
        info!(
            "event=document_save module=service status=ok collection={} id={}",
            D::COLLECTION,
            doc.id()
        );
        Ok(())
    }

    pub fn get_owned<D: Document>(&self, owner: &UserId, id: &str) -> RepoResult<Option<D>> {
        self.repo.get_owned(owner, id)
    }

    pub fn list_owned<D: Document>(
        &self,
        owner: &UserId,
        query: &ListQuery,
    ) -> RepoResult<Vec<D>> {
        self.repo.list_owned(owner, query)
    }

    /// Deletes a document only if it lives in `owner`'s partition.
    pub fn delete_owned<D: Document>(&self, owner: &UserId, id: &str) -> RepoResult<()> {
        self.require_owned::<D>(owner, id)?;
        self.repo.delete::<D>(id)?;
        info!(
            "event=document_delete module=service status=ok collection={} id={}",
            D::COLLECTION,
            id
        );
        Ok(())
    }

    fn create<D: Document>(&self, doc: &D) -> RepoResult<()> {
        self.repo.insert(doc)?;
        info!(
            "event=document_create module=service status=ok collection={} id={}",
            D::COLLECTION,
            doc.id()
        );
        Ok(())
    }

    fn require_owned<D: Document>(&self, owner: &UserId, id: &str) -> RepoResult<D> {
        self.repo
            .get_owned(owner, id)?
            .ok_or_else(|| RepoError::NotFound {
                collection: D::COLLECTION,
                id: id.to_string(),
            })
    }
}
