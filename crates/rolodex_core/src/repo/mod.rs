//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define collection-agnostic data access contracts over `Document`s.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Document::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `AlreadyExists`,
//!   `OwnerMismatch`) in addition to DB transport errors.

pub mod document_repo;
