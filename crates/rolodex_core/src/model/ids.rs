//! Opaque identifier types for every document kind.
//!
//! # Responsibility
//! - Give each soft foreign key its own type so references read explicitly
//!   in signatures (`owner: UserId`, `company_id: OrganizationId`).
//! - Serialize as plain strings so stored documents stay store-agnostic.
//!
//! # Invariants
//! - Ids are opaque: no format is assumed when reading existing documents.
//! - Generated ids are UUIDv4 text and never reused.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! document_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh random id.
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// Returns whether the id is empty or whitespace only.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }
    };
}

document_id!(
    /// Identifier of an account holder; also the partition key of owned data.
    UserId
);
document_id!(
    /// Identifier of an organization tracked by a user.
    OrganizationId
);
document_id!(
    /// Identifier of a person tracked by a user.
    PersonId
);
document_id!(
    /// Identifier of an event recorded by a user.
    EventId
);
document_id!(
    /// Identifier of a job application tracked by a user.
    JobApplicationId
);
