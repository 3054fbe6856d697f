//! Search seam between the pipeline and the external search engine.

use std::sync::RwLock;

use anyhow::{bail, Result};
use async_trait::async_trait;
use customsearch_client::{CustomSearchClient, SearchItem};

/// Paginated retrieval of raw result items for a query.
///
/// A fetch either returns the complete result window or fails; partial
/// result sets are never returned silently.
#[async_trait]
pub trait JobSearcher: Send + Sync {
    /// Fetch every available result for `query`, restricted to postings
    /// from the last `recency_days` days.
    async fn fetch(&self, query: &str, recency_days: u32) -> Result<Vec<SearchItem>>;
}

/// Google Programmable Search-backed searcher.
pub struct GoogleJobSearcher {
    client: CustomSearchClient,
}

impl GoogleJobSearcher {
    pub fn new(client: CustomSearchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobSearcher for GoogleJobSearcher {
    async fn fetch(&self, query: &str, recency_days: u32) -> Result<Vec<SearchItem>> {
        Ok(self.client.search(query, recency_days).await?)
    }
}

/// Mock searcher returning canned items, for tests.
///
/// Records every call so tests can assert on the query and recency the
/// pipeline actually sent.
#[derive(Debug, Default)]
pub struct MockJobSearcher {
    items: Vec<SearchItem>,
    error: Option<String>,
    calls: RwLock<Vec<(String, u32)>>,
}

impl MockJobSearcher {
    /// Return these items for every fetch.
    pub fn with_items(items: Vec<SearchItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Fail every fetch with this message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// The `(query, recency_days)` pairs fetched so far.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl JobSearcher for MockJobSearcher {
    async fn fetch(&self, query: &str, recency_days: u32) -> Result<Vec<SearchItem>> {
        self.calls
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push((query.to_string(), recency_days));

        if let Some(message) = &self.error {
            bail!("{message}");
        }
        Ok(self.items.clone())
    }
}
