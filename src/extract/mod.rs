//! Extraction of titles and image links from raw search responses.
//!
//! Each extractor supports two strategies, selected by [`ParseMode`]:
//!
//! | Mode | Module function | Method |
//! |------|-----------------|--------|
//! | `literal` | [`titles::extract_titles`], [`image_link::extract_image_link`] | delimiter search on the raw text |
//! | `json` | [`titles::titles_from_json`], [`image_link::image_link_from_json`] | `serde_json` decode, field lookup |
//!
//! The literal strategy depends on the body containing `title":"` and
//! `link":"` un-escaped, with each value followed by `",`. It never fails: a
//! body without markers simply yields nothing.

use crate::error::MonitorError;
use crate::models::ParseMode;

pub mod image_link;
pub mod titles;

/// Terminator of a value in the literal strategy.
const VALUE_END: &str = "\",";

/// Raw candidates following every occurrence of `marker`, in order.
///
/// Each candidate runs up to the next `",` or the end of its piece. Empty
/// pieces left at the very end of the body are dropped.
pub(crate) fn literal_candidates<'a>(body: &'a str, marker: &str) -> Vec<&'a str> {
    let mut pieces: Vec<&str> = body.split(marker).skip(1).collect();
    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    pieces
        .into_iter()
        .map(|piece| piece.split(VALUE_END).next().unwrap_or(piece))
        .collect()
}

/// Titles from `body` using the given strategy.
pub fn titles(body: &str, mode: ParseMode) -> Result<Vec<String>, MonitorError> {
    match mode {
        ParseMode::Literal => Ok(titles::extract_titles(body)),
        ParseMode::Json => titles::titles_from_json(body),
    }
}

/// First png/jpg link in `body` using the given strategy.
pub fn image_link(body: &str, mode: ParseMode) -> Result<Option<String>, MonitorError> {
    match mode {
        ParseMode::Literal => Ok(image_link::extract_image_link(body)),
        ParseMode::Json => image_link::image_link_from_json(body),
    }
}
