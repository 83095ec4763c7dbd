//! Citation style tags.
//!
//! The set of declared styles is fixed at compile time. Only some of them have
//! a formatting rule; see [`crate::formatter`] for the dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A citation formatting convention selected by the client.
///
/// Unrecognized names are kept verbatim in [`CitationStyle::Unrecognized`] so
/// the response can echo exactly what was requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CitationStyle {
    Apa,
    Mla,
    ChicagoTurabian,
    Harvard,
    Ieee,
    VancouverNlm,
    Ama,
    Cse,
    Bluebook,
    Asa,
    Unrecognized(String),
}

impl CitationStyle {
    /// Every declared style, in declaration order.
    pub const DECLARED: [CitationStyle; 10] = [
        CitationStyle::Apa,
        CitationStyle::Mla,
        CitationStyle::ChicagoTurabian,
        CitationStyle::Harvard,
        CitationStyle::Ieee,
        CitationStyle::VancouverNlm,
        CitationStyle::Ama,
        CitationStyle::Cse,
        CitationStyle::Bluebook,
        CitationStyle::Asa,
    ];

    /// Wire name of the style, exactly as clients send it.
    pub fn as_str(&self) -> &str {
        match self {
            CitationStyle::Apa => "APA",
            CitationStyle::Mla => "MLA",
            CitationStyle::ChicagoTurabian => "Chicago/Turabian",
            CitationStyle::Harvard => "Harvard",
            CitationStyle::Ieee => "IEEE",
            CitationStyle::VancouverNlm => "Vancouver/NLM",
            CitationStyle::Ama => "AMA",
            CitationStyle::Cse => "CSE",
            CitationStyle::Bluebook => "Bluebook",
            CitationStyle::Asa => "ASA",
            CitationStyle::Unrecognized(name) => name,
        }
    }

    /// Parse a wire name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Self {
        Self::DECLARED
            .iter()
            .find(|style| style.as_str() == name)
            .cloned()
            .unwrap_or_else(|| CitationStyle::Unrecognized(name.to_string()))
    }
}

impl Default for CitationStyle {
    /// A request without a style is treated as an empty, unrecognized name.
    fn default() -> Self {
        CitationStyle::Unrecognized(String::new())
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CitationStyle {
    fn from(name: String) -> Self {
        CitationStyle::from_name(&name)
    }
}

impl From<CitationStyle> for String {
    fn from(style: CitationStyle) -> Self {
        match style {
            CitationStyle::Unrecognized(name) => name,
            declared => declared.as_str().to_string(),
        }
    }
}

/// Catalog entry describing one declared style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleInfo {
    pub name: String,
    /// Whether a formatting rule exists for this style.
    pub implemented: bool,
}
