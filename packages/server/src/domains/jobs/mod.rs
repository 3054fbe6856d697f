//! Jobs domain - discovery of postings and publication of created events.

pub mod events;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod search;

pub use events::{publish_job_created, JobCreatedEvent, JobEventType, JOB_CREATED_SUBJECT};
pub use extract::extract;
pub use models::{JobRecord, JobStatus, SearchRequest, POSTED_AT_UNKNOWN, UNKNOWN_FIELD};
pub use pipeline::{search_and_publish, RunSummary};
pub use query::build_query;
pub use search::{GoogleJobSearcher, JobSearcher, MockJobSearcher};
