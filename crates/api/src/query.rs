//! Query parameter types for API handlers.

use serde::{Deserialize, Deserializer};
use shelter_core::filter::RecordFilter;

/// Filter parameters for record listings (`?name=&species=&age=&gender=`).
///
/// Omitted parameters place no constraint; empty values count as omitted.
#[derive(Debug, Default, Deserialize)]
pub struct RecordListParams {
    pub name: Option<String>,
    pub species: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl From<RecordListParams> for RecordFilter {
    fn from(params: RecordListParams) -> Self {
        RecordFilter::new(params.name, params.species, params.age, params.gender)
    }
}

/// `age=` is treated as absent; anything else must parse as an integer.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid age {raw:?}: {e}"))),
    }
}
