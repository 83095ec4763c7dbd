//! Citation formatting.
//!
//! Each implemented style is a rule: an ordered list of clauses, where a
//! clause is emitted whole (punctuation included) only when its source field
//! is non-empty. Emitted clauses are joined with single spaces.
//!
//! Styles without a rule render [`PLACEHOLDER`] instead of failing.

pub mod apa;
pub mod mla;

use crate::models::{CitationData, CitationStyle, StyleInfo};

/// Output for styles that are declared but have no rule yet, and for
/// unrecognized style names.
pub const PLACEHOLDER: &str = "Citation format coming soon...";

/// A formatting rule for one style.
pub type FormatRule = fn(&CitationData) -> String;

/// Look up the rule for a style, if one exists.
pub fn rule_for(style: &CitationStyle) -> Option<FormatRule> {
    match style {
        CitationStyle::Mla => Some(mla::format),
        CitationStyle::Apa => Some(apa::format),
        CitationStyle::ChicagoTurabian
        | CitationStyle::Harvard
        | CitationStyle::Ieee
        | CitationStyle::VancouverNlm
        | CitationStyle::Ama
        | CitationStyle::Cse
        | CitationStyle::Bluebook
        | CitationStyle::Asa
        | CitationStyle::Unrecognized(_) => None,
    }
}

/// Format `data` according to `style`.
pub fn generate_citation(style: &CitationStyle, data: &CitationData) -> String {
    match rule_for(style) {
        Some(rule) => rule(data),
        None => PLACEHOLDER.to_string(),
    }
}

/// All declared styles with a flag telling whether a rule exists.
pub fn style_catalog() -> Vec<StyleInfo> {
    CitationStyle::DECLARED
        .iter()
        .map(|style| StyleInfo {
            name: style.as_str().to_string(),
            implemented: rule_for(style).is_some(),
        })
        .collect()
}

/// Accumulates the clauses of one citation.
#[derive(Debug, Default)]
pub(crate) struct Clauses {
    parts: Vec<String>,
}

impl Clauses {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Emit `render(field)` when `field` is non-empty.
    pub(crate) fn field(&mut self, field: &str, render: impl FnOnce(&str) -> String) -> &mut Self {
        if !field.is_empty() {
            self.parts.push(render(field));
        }
        self
    }

    /// Emit `field` followed by `suffix` when `field` is non-empty.
    pub(crate) fn suffixed(&mut self, field: &str, suffix: &str) -> &mut Self {
        self.field(field, |value| format!("{value}{suffix}"))
    }

    pub(crate) fn finish(&mut self) -> String {
        std::mem::take(&mut self.parts).join(" ")
    }
}
