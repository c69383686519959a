//! Data models for search requests, search responses and run results.
//!
//! This module defines the small set of types passed between the phases of a
//! monitoring run:
//! - [`SearchRequest`]: parameters of a single call to the search API
//! - [`Category`] and [`SortOrder`]: the endpoint and ordering of that call
//! - [`ParseMode`]: how titles and links are pulled out of a response body
//! - [`SearchResponse`]: the structured view of a response, used only by
//!   [`ParseMode::Json`]
//! - [`RunSummary`]: what a finished run produced on disk

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Search API endpoint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    News,
    Image,
}

impl Category {
    /// Path segment appended to the search API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Category::News => "news",
            Category::Image => "image",
        }
    }
}

/// Result ordering understood by the search API.
///
/// - `Sim`: relevance/similarity
/// - `Date`: newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Sim,
    Date,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Sim => "sim",
            SortOrder::Date => "date",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one search API call.
///
/// Built right before the call and dropped right after it.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Search term, sent as the `query` parameter.
    pub keyword: String,
    /// Number of results to return (`display`).
    pub display: u32,
    /// 1-based offset of the first result (`start`).
    pub start: u32,
    /// Ordering of the results (`sort`).
    pub sort: SortOrder,
    /// Endpoint to call.
    pub category: Category,
}

impl SearchRequest {
    /// Query parameters in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.keyword.clone()),
            ("display", self.display.to_string()),
            ("start", self.start.to_string()),
            ("sort", self.sort.as_str().to_string()),
        ]
    }
}

/// Strategy for extracting titles and links from a response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ParseMode {
    /// Delimiter search over the raw text (`title":"…",` / `link":"…",`).
    #[default]
    Literal,
    /// Decode the body as JSON and read the `title` / `link` fields.
    Json,
}

/// Structured search response. Only the fields this tool reads are modeled.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// A single news or image hit.
#[derive(Debug, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Files written by a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Path of `<keyword>.txt`.
    pub titles_path: PathBuf,
    /// Number of titles written.
    pub title_count: usize,
    /// Path of `image_<keyword>.<ext>`, absent when no png/jpg link was found.
    pub image_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_paths() {
        assert_eq!(Category::News.path(), "news");
        assert_eq!(Category::Image.path(), "image");
    }

    #[test]
    fn test_sort_order_values() {
        assert_eq!(SortOrder::Date.to_string(), "date");
        assert_eq!(SortOrder::Sim.to_string(), "sim");
    }

    #[test]
    fn test_query_pairs() {
        let req = SearchRequest {
            keyword: "rust".to_string(),
            display: 10,
            start: 1,
            sort: SortOrder::Date,
            category: Category::News,
        };
        let pairs = req.query_pairs();
        assert_eq!(pairs[0], ("query", "rust".to_string()));
        assert_eq!(pairs[1], ("display", "10".to_string()));
        assert_eq!(pairs[2], ("start", "1".to_string()));
        assert_eq!(pairs[3], ("sort", "date".to_string()));
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "lastBuildDate": "Mon, 19 Oct 2026 09:00:00 +0900",
            "total": 2,
            "items": [
                {"link": "https://a.example/1", "title": "First"},
                {"title": "Second"}
            ]
        }"#;

        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.items[0].title.as_deref(), Some("First"));
        assert_eq!(resp.items[0].link.as_deref(), Some("https://a.example/1"));
        assert_eq!(resp.items[1].link, None);
    }

    #[test]
    fn test_search_response_without_items() {
        let resp: SearchResponse = serde_json::from_str(r#"{"errorCode": "SE01"}"#).unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn test_parse_mode_default_is_literal() {
        assert_eq!(ParseMode::default(), ParseMode::Literal);
    }
}
