//! Discovery pipeline: query building, search, extraction, publication.

use anyhow::{Context as _, Result};
use tracing::{info, warn};

use super::events::publish_job_created;
use super::extract::extract;
use super::models::SearchRequest;
use super::query::build_query;
use super::search::JobSearcher;
use crate::kernel::nats::EventPublisher;

/// Outcome of one discovery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Events the broker accepted.
    pub published: usize,
    /// Records extracted from the search results, counted before any
    /// publish attempt.
    pub total_found: usize,
}

/// Run the full pipeline for one request.
///
/// A search failure aborts the run: no partial result set is extracted or
/// published. Publish failures are absorbed per job, so one rejected event
/// never blocks its siblings; the summary reports how many made it out.
/// Re-discovered postings publish again on every run, with deduplication
/// left to consumers.
pub async fn search_and_publish(
    request: &SearchRequest,
    searcher: &dyn JobSearcher,
    publisher: &dyn EventPublisher,
) -> Result<RunSummary> {
    let query = build_query(request);

    info!(website = %request.website, query = %query, "Starting job discovery");

    let items = searcher
        .fetch(&query, request.recency_days)
        .await
        .context("search stage failed")?;

    let jobs: Vec<_> = items
        .iter()
        .map(|item| extract(item, &request.website))
        .collect();

    info!(total_found = jobs.len(), "Extracted job records");

    let mut published = 0;
    for job in &jobs {
        match publish_job_created(job, publisher).await {
            Ok(()) => {
                info!(name = %job.name, company = %job.company, "Published job event");
                published += 1;
            }
            Err(e) => {
                warn!(name = %job.name, url = %job.url, error = %e, "Failed to publish job event");
            }
        }
    }

    info!(published, total_found = jobs.len(), "Discovery run complete");

    Ok(RunSummary {
        published,
        total_found: jobs.len(),
    })
}
