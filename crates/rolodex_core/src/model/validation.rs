//! Write-path validation for stored documents.
//!
//! # Responsibility
//! - Reject documents missing the fields a record cannot be useful without.
//!
//! # Invariants
//! - Validation is only run by persistence write paths; decoding a document
//!   never validates, so foreign documents always load.
//! - Free-form fields (dates, emails, attribute keys) are never checked.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures for a document about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The document id (`_id`) is empty or whitespace.
    EmptyId { collection: &'static str },
    /// A required field is empty or whitespace.
    EmptyField {
        collection: &'static str,
        field: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId { collection } => {
                write!(f, "{collection} document must have a non-empty `_id`")
            }
            Self::EmptyField { collection, field } => {
                write!(f, "{collection} document must have a non-empty `{field}`")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_id(collection: &'static str, id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::EmptyId { collection });
    }
    Ok(())
}

pub(crate) fn require_text(
    collection: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { collection, field });
    }
    Ok(())
}
