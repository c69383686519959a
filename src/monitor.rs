//! The monitoring pipeline.
//!
//! A run is two phases executed strictly in order:
//! 1. **News**: search news sorted by date, extract titles, write `<keyword>.txt`
//! 2. **Image**: search images sorted by similarity, pick the first png/jpg
//!    link, download it to `image_<keyword>.<ext>`
//!
//! The news file is on disk before the image search starts, so a failure in
//! the image phase never loses it. Any error stops the run immediately.

use crate::api::NaverClient;
use crate::error::MonitorError;
use crate::extract;
use crate::models::{Category, ParseMode, RunSummary, SearchRequest, SortOrder};
use crate::outputs::{image::download_image, titles::save_titles};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, instrument};

pub const DEFAULT_DISPLAY: u32 = 10;
pub const DEFAULT_START: u32 = 1;

/// Runs the news and image phases for a keyword.
#[derive(Debug)]
pub struct Monitoring {
    client: NaverClient,
    output_dir: PathBuf,
    display: u32,
    start: u32,
    parse_mode: ParseMode,
}

impl Monitoring {
    pub fn new(client: NaverClient, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
            display: DEFAULT_DISPLAY,
            start: DEFAULT_START,
            parse_mode: ParseMode::default(),
        }
    }

    /// Result count and 1-based offset used for both searches.
    pub fn with_paging(mut self, display: u32, start: u32) -> Self {
        self.display = display;
        self.start = start;
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = parse_mode;
        self
    }

    fn request(&self, keyword: &str, category: Category, sort: SortOrder) -> SearchRequest {
        SearchRequest {
            keyword: keyword.to_string(),
            display: self.display,
            start: self.start,
            sort,
            category,
        }
    }

    /// Execute both phases for `keyword`.
    ///
    /// Finding no png/jpg image is a normal outcome: the summary then has no
    /// `image_path` and nothing is downloaded.
    ///
    /// # Arguments
    ///
    /// * `keyword` - Search term for both phases; also names the output files
    ///
    /// # Returns
    ///
    /// A [`RunSummary`] of the files written, or the first error hit. An error
    /// in the image phase leaves the titles file in place.
    #[instrument(level = "info", skip(self), fields(parse_mode = ?self.parse_mode))]
    pub async fn run(&self, keyword: &str) -> Result<RunSummary, MonitorError> {
        let t0 = Instant::now();

        // --- News phase ---
        let news = self
            .client
            .search(&self.request(keyword, Category::News, SortOrder::Date))
            .await?;
        let titles = extract::titles(&news, self.parse_mode)?;
        let titles_path = save_titles(&self.output_dir, keyword, &titles).await?;

        // --- Image phase ---
        let images = self
            .client
            .search(&self.request(keyword, Category::Image, SortOrder::Sim))
            .await?;
        let Some(link) = extract::image_link(&images, self.parse_mode)? else {
            info!("No png or jpg image found");
            return Ok(RunSummary {
                titles_path,
                title_count: titles.len(),
                image_path: None,
            });
        };
        let image_path = download_image(self.client.http(), &self.output_dir, keyword, &link).await?;

        info!(elapsed_ms = t0.elapsed().as_millis() as u64, "Run complete");
        Ok(RunSummary {
            titles_path,
            title_count: titles.len(),
            image_path: Some(image_path),
        })
    }
}
