//! Pure Google Programmable Search (Custom Search JSON API) client.
//!
//! A minimal client for the Custom Search `v1` endpoint. Supports fetching a
//! single result page and walking the paginated result window, with the API
//! key held behind a redacting wrapper.
//!
//! # Example
//!
//! ```rust,ignore
//! use customsearch_client::CustomSearchClient;
//!
//! let client = CustomSearchClient::new("your-api-key", "your-cx-id");
//!
//! let items = client.search("site:linkedin.com/jobs/view \"Dublin\"", 3).await?;
//! for item in &items {
//!     println!("{} -> {}", item.title, item.link);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{CustomSearchError, Result};
pub use types::SearchItem;

use secrecy::{ExposeSecret, SecretString};
use types::SearchResponse;

const BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Results per page; also the stride between `start` offsets.
const PAGE_SIZE: u32 = 10;

/// Highest `start` offset the API serves. Offsets past this return an
/// error, so pagination must stop before requesting one.
const MAX_START: u32 = 50;

pub struct CustomSearchClient {
    client: reqwest::Client,
    api_key: SecretString,
    cx: String,
    base_url: String,
}

impl CustomSearchClient {
    pub fn new(api_key: impl Into<String>, cx: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: SecretString::from(api_key.into()),
            cx: cx.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint. Used by tests to stand in
    /// a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch one result page at the given 1-based `start` offset, restricted
    /// to results published within the last `recency_days` days.
    pub async fn fetch_page(
        &self,
        query: &str,
        recency_days: u32,
        start: u32,
    ) -> Result<Vec<SearchItem>> {
        let date_restrict = format!("d{recency_days}");
        let start_param = start.to_string();

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("key", self.api_key.expose_secret()),
                ("cx", self.cx.as_str()),
                ("dateRestrict", date_restrict.as_str()),
                ("start", start_param.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CustomSearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let page: SearchResponse = resp.json().await?;
        tracing::debug!(start, count = page.items.len(), "Fetched result page");
        Ok(page.items)
    }

    /// Walk the paginated result window for `query`, newest `recency_days`
    /// days only, and collect every item in page order.
    ///
    /// Stops at the first blank page or once the next offset would pass the
    /// API's result window; it never requests an offset past `MAX_START`.
    /// Any page failure aborts the walk, so callers never see a silently
    /// truncated result set.
    pub async fn search(&self, query: &str, recency_days: u32) -> Result<Vec<SearchItem>> {
        let mut items = Vec::new();
        let mut start = 1;

        loop {
            let page = self.fetch_page(query, recency_days, start).await?;
            if page.is_empty() {
                break;
            }
            items.extend(page);

            start += PAGE_SIZE;
            if start > MAX_START {
                tracing::debug!(query, "Result window exhausted");
                break;
            }
        }

        tracing::info!(query, count = items.len(), "Search complete");
        Ok(items)
    }
}
