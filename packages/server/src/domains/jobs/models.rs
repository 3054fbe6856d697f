use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for title segments the extractor could not recover.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Sentinel meaning "posting age unknown", not "posted at the epoch".
/// Downstream consumers rely on this exact value to spot unknown ages.
pub const POSTED_AT_UNKNOWN: DateTime<Utc> = DateTime::UNIX_EPOCH;

/// Search request accepted by the update endpoint.
///
/// `job_types` keeps its request order: the query builder joins the titles
/// into an OR-group in the order given. `recency_days` bounds how old a
/// posting may be for the search stage to return it.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub website: String,
    #[serde(rename = "type")]
    pub job_types: Vec<String>,
    pub location: String,
    #[serde(rename = "time")]
    pub recency_days: u32,
}

/// Lifecycle status stamped on records at creation. Discovery only ever
/// emits `New`; later transitions belong to downstream consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    New,
}

/// One discovered posting.
///
/// Extraction is total: fields it cannot recover hold the documented
/// sentinels ([`UNKNOWN_FIELD`], [`POSTED_AT_UNKNOWN`]) rather than being
/// absent, so a discovered job is never dropped for being hard to read.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub name: String,
    pub url: String,
    pub posted_at: DateTime<Utc>,
    pub status: JobStatus,
    pub website: String,
    pub company: String,
    pub job_type: String,
    pub location: String,
}
