//! Job lifecycle events and their wire format.
//!
//! The wire shape is a contract with downstream consumers; field names and
//! value formats here cannot change without coordinating with them.

use anyhow::Result;
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::models::{JobRecord, JobStatus};
use crate::kernel::nats::EventPublisher;

/// Subject job-created events publish under, inside the job-events stream.
pub const JOB_CREATED_SUBJECT: &str = "job.created";

/// Posting-time format consumers parse (`2024-05-15 09:00:00`).
const POSTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Event discriminator carried on every job event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobEventType {
    Created,
}

/// Wire form of one discovered job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreatedEvent {
    pub name: String,
    pub company: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub location: String,
    pub website: String,
    pub url: String,
    /// Posting time as `YYYY-MM-DD HH:MM:SS`; the epoch start when unknown.
    pub time: String,
    pub status: JobStatus,
    #[serde(rename = "eventType")]
    pub event_type: JobEventType,
    /// Emission time, RFC 3339.
    pub timestamp: String,
}

impl JobCreatedEvent {
    /// Build the event for a record, stamping the emission time.
    pub fn for_record(job: &JobRecord) -> Self {
        Self {
            name: job.name.clone(),
            company: job.company.clone(),
            job_type: job.job_type.clone(),
            location: job.location.clone(),
            website: job.website.clone(),
            url: job.url.clone(),
            time: job.posted_at.format(POSTED_AT_FORMAT).to_string(),
            status: job.status,
            event_type: JobEventType::Created,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Publish one job-created event.
///
/// Failure here is the caller's to absorb: one rejected publish must not
/// keep sibling jobs from going out.
pub async fn publish_job_created(job: &JobRecord, publisher: &dyn EventPublisher) -> Result<()> {
    let event = JobCreatedEvent::for_record(job);
    let payload = serde_json::to_vec(&event)?;
    publisher
        .publish(JOB_CREATED_SUBJECT.to_string(), Bytes::from(payload))
        .await
}
