//! Bibliographic field-set and the request/response envelopes around it.

use serde::{Deserialize, Deserializer, Serialize};

use super::style::CitationStyle;

/// Flat record of bibliographic attributes submitted with a request.
///
/// Every field is optional. Absent keys and `null` values deserialize to the
/// empty string, and the formatter treats an empty string as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CitationData {
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub container_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub other_contributors: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publication_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_accessed: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub doi: String,
    #[serde(deserialize_with = "null_as_default")]
    pub volume: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issue: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: String,
    #[serde(deserialize_with = "null_as_default")]
    pub edition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(deserialize_with = "null_as_default")]
    pub month: String,
    #[serde(deserialize_with = "null_as_default")]
    pub day: String,
}

/// Body of `POST /api/generate-citation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub style: CitationStyle,
    #[serde(deserialize_with = "null_as_default")]
    pub data: CitationData,
}

/// Reads an optional value, mapping `null` to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Formatted citation plus the style name that was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationResponse {
    pub citation: String,
    pub style: String,
}
