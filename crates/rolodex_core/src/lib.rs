//! Core domain logic for Rolodex, a personal contact manager.
//! This crate owns the document shapes and their persistence contracts.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::attribute::{Attribute, HasAttributes};
pub use model::document::Document;
pub use model::event::Event;
pub use model::ids::{EventId, JobApplicationId, OrganizationId, PersonId, UserId};
pub use model::job_application::JobApplication;
pub use model::organization::Organization;
pub use model::person::{Address, JobHistory, Person};
pub use model::user::User;
pub use model::validation::ValidationError;
pub use repo::document_repo::{
    DocumentRepository, ListQuery, RepoError, RepoResult, SqliteDocumentRepository,
};
pub use service::rolodex_service::{NewJobApplication, RolodexService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
