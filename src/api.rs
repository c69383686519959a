//! Naver search API client.
//!
//! One GET per call, no retries. Transport failures are logged with their
//! cause and collapsed into [`MonitorError::Connection`]. The HTTP status is
//! only logged: an error page is returned to the caller like any other body
//! unless strict status checking was requested.

use crate::error::MonitorError;
use crate::models::{Category, SearchRequest};
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::fmt;
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Production search API root. Category paths are appended to it.
pub const DEFAULT_BASE_URL: &str = "https://openapi.naver.com/v1/search";

const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

/// API credentials sent with every search request.
///
/// Empty values are allowed; the API answers them with an authentication
/// error.
#[derive(Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Client for the news and image search endpoints.
#[derive(Debug, Clone)]
pub struct NaverClient {
    http: Client,
    base_url: Url,
    credentials: Credentials,
    strict_status: bool,
}

impl NaverClient {
    /// Create a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::InvalidUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, MonitorError> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http: Client::new(),
            base_url,
            credentials,
            strict_status: false,
        })
    }

    /// Fail with [`MonitorError::Status`] on non-2xx responses instead of
    /// returning the body.
    pub fn with_strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    /// Underlying HTTP client, shared with the image downloader.
    pub fn http(&self) -> &Client {
        &self.http
    }

    fn endpoint(&self, category: Category) -> Result<Url, MonitorError> {
        Ok(self.base_url.join(category.path())?)
    }

    /// Run one search and return the response body as text.
    ///
    /// # Arguments
    ///
    /// * `req` - Category, keyword, paging and sort order of the search
    ///
    /// # Returns
    ///
    /// The raw response body, whatever the status code unless strict status
    /// checking is on.
    ///
    /// # Errors
    ///
    /// - [`MonitorError::Connection`] on any transport failure
    /// - [`MonitorError::Status`] on a non-2xx status, strict mode only
    #[instrument(level = "info", skip_all, fields(category = req.category.path(), sort = %req.sort))]
    pub async fn search(&self, req: &SearchRequest) -> Result<String, MonitorError> {
        let url = self.endpoint(req.category)?;
        let t0 = Instant::now();

        let response = self
            .http
            .get(url)
            .query(&req.query_pairs())
            .header(CLIENT_ID_HEADER, self.credentials.client_id.as_str())
            .header(CLIENT_SECRET_HEADER, self.credentials.client_secret.as_str())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Search request failed");
                MonitorError::Connection
            })?;

        let status = response.status();
        info!(
            status = status.as_u16(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "API response code"
        );
        if self.strict_status && !status.is_success() {
            return Err(MonitorError::Status { status });
        }

        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Reading search response failed");
            MonitorError::Connection
        })?;
        debug!(preview = %truncate_for_log(&body, 300), "Search response body");
        Ok(body)
    }
}
