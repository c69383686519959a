//! Image link selection.
//!
//! Only `png` and `jpg` links qualify; everything else the image search
//! returns (gif, webp, extensionless CDN paths) is skipped.

use super::literal_candidates;
use crate::error::MonitorError;
use crate::models::SearchResponse;
use crate::utils::has_supported_image_extension;
use tracing::{debug, instrument};

const LINK_MARKER: &str = "link\":\"";

/// Drop everything from the first `?` on.
fn without_query(link: &str) -> &str {
    link.split('?').next().unwrap_or(link)
}

/// First qualifying image link in a raw image response.
///
/// Each candidate is cut at `?` and has its backslashes removed (the API
/// escapes `/` as `\/`) before the extension check. Returns `None` when no
/// candidate ends in png or jpg.
#[instrument(level = "debug", skip_all, fields(bytes = body.len()))]
pub fn extract_image_link(body: &str) -> Option<String> {
    for raw in literal_candidates(body, LINK_MARKER) {
        let candidate = without_query(raw).replace('\\', "");
        if has_supported_image_extension(&candidate) {
            debug!(link = %candidate, "Selected image link");
            return Some(candidate);
        }
        debug!(link = %candidate, "Skipping unsupported image link");
    }
    None
}

/// Decode an image response as JSON and return the first png/jpg `link`.
#[instrument(level = "debug", skip_all, fields(bytes = body.len()))]
pub fn image_link_from_json(body: &str) -> Result<Option<String>, MonitorError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let link = response
        .items
        .into_iter()
        .filter_map(|item| item.link)
        .map(|link| without_query(&link).to_string())
        .find(|link| has_supported_image_extension(link));
    debug!(found = link.is_some(), "Decoded image link");
    Ok(link)
}
