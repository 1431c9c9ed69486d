use serde::{Deserialize, Deserializer};

pub mod filter;
pub mod resources;
pub mod vendors;

/// Treats a blank form field as absent.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}
