//! News title extraction.

use super::literal_candidates;
use crate::error::MonitorError;
use crate::models::SearchResponse;
use crate::utils::strip_html_tags;
use tracing::{debug, instrument};

const TITLE_MARKER: &str = "title\":\"";

/// Pull every title out of a raw news response.
///
/// Takes the text after each `title":"` up to the next `",` and strips any
/// `<...>` tags from it. Order of appearance is preserved. A body without the
/// marker yields an empty list.
#[instrument(level = "debug", skip_all, fields(bytes = body.len()))]
pub fn extract_titles(body: &str) -> Vec<String> {
    let titles: Vec<String> = literal_candidates(body, TITLE_MARKER)
        .into_iter()
        .map(strip_html_tags)
        .collect();
    debug!(count = titles.len(), "Extracted titles");
    titles
}

/// Decode a news response as JSON and collect the `title` of every item.
///
/// Items without a title are skipped.
#[instrument(level = "debug", skip_all, fields(bytes = body.len()))]
pub fn titles_from_json(body: &str) -> Result<Vec<String>, MonitorError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let titles: Vec<String> = response
        .items
        .into_iter()
        .filter_map(|item| item.title)
        .map(|t| strip_html_tags(&t))
        .collect();
    debug!(count = titles.len(), "Decoded titles");
    Ok(titles)
}
