//! MLA rule.

use super::Clauses;
use crate::models::CitationData;

/// Stand-in for the access date when a URL is cited without one.
const MISSING_ACCESS_DATE: &str = "Date";

pub fn format(data: &CitationData) -> String {
    Clauses::new()
        .suffixed(&data.author, ".")
        .field(&data.title, |title| format!("\"{title}.\""))
        .suffixed(&data.container_title, ",")
        .suffixed(&data.other_contributors, ",")
        .suffixed(&data.version, ",")
        .suffixed(&data.number, ",")
        .suffixed(&data.publisher, ",")
        .suffixed(&data.publication_date, ",")
        .suffixed(&data.location, ".")
        .field(&data.url, |url| {
            let accessed = if data.date_accessed.is_empty() {
                MISSING_ACCESS_DATE
            } else {
                data.date_accessed.as_str()
            };
            format!("Web. {accessed}. <{url}>.")
        })
        .finish()
}
