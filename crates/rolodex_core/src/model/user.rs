//! Application account holder.

use crate::model::document::Document;
use crate::model::ids::UserId;
use crate::model::validation::{require_id, require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Root record of every data partition; not owned by anyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Creates a user with a generated id.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self::with_id(UserId::new(), email, first_name, last_name)
    }

    /// Creates a user with a caller-provided id (import paths).
    pub fn with_id(
        id: UserId,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Document for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn owner(&self) -> Option<&UserId> {
        None
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_id(Self::COLLECTION, self.id.as_str())?;
        require_text(Self::COLLECTION, "email", &self.email)
    }
}
