//! Serde helpers shared by document shapes.

use serde::{Deserialize, Deserializer};

/// Decodes a sequence field that other writers may have stored as `null`.
///
/// Paired with `#[serde(default)]` so a missing field also decodes as empty.
pub(crate) fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
