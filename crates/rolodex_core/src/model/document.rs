//! Persistence contract shared by every stored record.
//!
//! # Responsibility
//! - Bind each record shape to its collection, id, and owner partition.
//!
//! # Invariants
//! - `owner()` is `None` only for `User`, the root of every partition.
//! - `COLLECTION` names are stable storage keys; renaming one orphans data.

use crate::model::ids::UserId;
use crate::model::validation::ValidationError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record persisted as one document in a named collection.
pub trait Document: Serialize + DeserializeOwned {
    /// Collection (table partition) this record is stored in.
    const COLLECTION: &'static str;

    /// Document primary key, serialized as `_id`.
    fn id(&self) -> &str;

    /// Owning user, or `None` for root records.
    fn owner(&self) -> Option<&UserId>;

    /// Checks required fields before persistence.
    fn validate(&self) -> Result<(), ValidationError>;
}
