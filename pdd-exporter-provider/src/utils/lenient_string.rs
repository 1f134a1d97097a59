//! Deserialize a field the API sends either as a string or as a number.
//!
//! The PDD record list reports `priority` as `""` for most record types but
//! as a bare integer for MX/SRV records on some accounts. Both become a
//! `String`; `null` and a missing field become an empty string.

use serde::{Deserialize, Deserializer};

/// Use with `#[serde(default, deserialize_with = "...")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        I64(i64),
        U64(u64),
        F64(f64),
    }

    Ok(
        match Option::<StringOrNumber>::deserialize(deserializer)? {
            Some(StringOrNumber::String(s)) => s,
            Some(StringOrNumber::I64(n)) => n.to_string(),
            Some(StringOrNumber::U64(n)) => n.to_string(),
            Some(StringOrNumber::F64(n)) => n.to_string(),
            None => String::new(),
        },
    )
}
