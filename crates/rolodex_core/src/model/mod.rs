//! Contact-management domain model.
//!
//! # Responsibility
//! - Define the document shapes persisted per user: users, organizations,
//!   people, events, and job applications.
//! - Map every field to its stable document field name.
//!
//! # Invariants
//! - Records reference each other only by typed opaque ids; no record embeds
//!   another.
//! - Every record except `User` carries the owning `UserId`.
//! - Shapes enforce field presence only; see `validation` for write checks.

pub mod attribute;
mod codec;
pub mod document;
pub mod event;
pub mod ids;
pub mod job_application;
pub mod organization;
pub mod person;
pub mod user;
pub mod validation;
