//! Deserialize `null` as the type's default.
//!
//! `#[serde(default)]` only covers a missing field; the PDD API also sends
//! explicit `null` for empty lists and blank strings.

use serde::{Deserialize, Deserializer};

/// Use with `#[serde(default, deserialize_with = "...")]`.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
