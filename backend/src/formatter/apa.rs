//! APA rule.

use super::Clauses;
use crate::models::CitationData;

const DOI_RESOLVER: &str = "https://doi.org/";

pub fn format(data: &CitationData) -> String {
    let mut clauses = Clauses::new();
    clauses
        .field(&data.author, str::to_string)
        .field(&data.year, |year| format!("({year})."))
        .suffixed(&data.title, ".")
        .suffixed(&data.container_title, ",")
        .field(&data.volume, |volume| {
            if data.issue.is_empty() {
                format!("{volume},")
            } else {
                format!("{volume}({}),", data.issue)
            }
        })
        .suffixed(&data.pages, ".");

    // DOI wins over a plain URL.
    if !data.doi.is_empty() {
        clauses.field(&data.doi, |doi| format!("{DOI_RESOLVER}{doi}"));
    } else {
        clauses.field(&data.url, str::to_string);
    }

    clauses.finish()
}
