//! User-defined key/value annotations.
//!
//! # Responsibility
//! - Define the reusable `Attribute` value shared by every owned record.
//! - Provide ordered lookup helpers over attribute bags.
//!
//! # Invariants
//! - Attribute bags are ordered sequences, not maps: insertion order is kept
//!   and duplicate keys are allowed.
//! - Keys and values are unconstrained text.

use serde::{Deserialize, Serialize};

/// One user-defined key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Access to a record's attribute bag.
///
/// Implementors only expose the backing vector; lookups are shared.
pub trait HasAttributes {
    fn attrs(&self) -> &[Attribute];
    fn attrs_mut(&mut self) -> &mut Vec<Attribute>;

    /// Returns the value of the first attribute named `key`.
    fn attr(&self, key: &str) -> Option<&str> {
        self.attrs()
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    /// Returns every value stored under `key`, in insertion order.
    fn attrs_named<'a>(&'a self, key: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(
            self.attrs()
                .iter()
                .filter(move |attr| attr.key == key)
                .map(|attr| attr.value.as_str()),
        )
    }

    /// Appends an attribute; existing entries with the same key are kept.
    fn push_attr(&mut self, key: impl Into<String>, value: impl Into<String>)
    where
        Self: Sized,
    {
        self.attrs_mut().push(Attribute::new(key, value));
    }
}
