//! Broker abstraction for production and testing.
//!
//! Events go out through JetStream so they survive broker restarts and
//! consumers can join late. Tests swap in a recording publisher instead of
//! a real connection.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use anyhow::{bail, Context as _, Result};
use async_nats::jetstream;
use async_trait::async_trait;
use bytes::Bytes;

/// Durable stream carrying job lifecycle events.
pub const JOB_EVENTS_STREAM: &str = "job-events";

/// Subject space bound to the stream; individual event kinds publish under
/// their own subject within it.
pub const JOB_EVENTS_SUBJECTS: &str = "job.*";

/// A published message.
#[derive(Debug, Clone)]
pub struct PublishedMessage {
    pub subject: String,
    pub payload: Bytes,
}

/// Trait for event publish operations.
///
/// The engine emits events only through this seam, so tests can swap in
/// [`TestPublisher`] and assert on what would have reached the broker.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a payload under a subject, returning once the broker has
    /// accepted it.
    async fn publish(&self, subject: String, payload: Bytes) -> Result<()>;
}

/// JetStream-backed publisher.
///
/// One connection is opened at startup and shared by every publish; a
/// failed publish leaves the connection usable for the next one.
pub struct JetStreamPublisher {
    jetstream: jetstream::Context,
}

impl JetStreamPublisher {
    /// Connect to the broker and make sure the durable job-events stream
    /// exists. Creating an already-existing stream is a no-op.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = async_nats::connect(url)
            .await
            .with_context(|| format!("failed to connect to NATS at {url}"))?;
        let jetstream = jetstream::new(client);

        jetstream
            .get_or_create_stream(jetstream::stream::Config {
                name: JOB_EVENTS_STREAM.to_string(),
                subjects: vec![JOB_EVENTS_SUBJECTS.to_string()],
                storage: jetstream::stream::StorageType::File,
                ..Default::default()
            })
            .await
            .context("failed to ensure the job-events stream")?;

        Ok(Self { jetstream })
    }
}

#[async_trait]
impl EventPublisher for JetStreamPublisher {
    async fn publish(&self, subject: String, payload: Bytes) -> Result<()> {
        let mut headers = async_nats::HeaderMap::new();
        headers.insert("Content-Type", "application/json");

        // Waiting on the ack is what makes delivery durable rather than
        // fire-and-forget.
        self.jetstream
            .publish_with_headers(subject, headers, payload)
            .await
            .context("broker rejected the publish")?
            .await
            .context("broker did not acknowledge the publish")?;

        Ok(())
    }
}

/// Mock publisher that records messages instead of sending them.
///
/// Individual calls can be made to fail (by 0-based call index) to exercise
/// how callers isolate per-message failures.
#[derive(Debug, Default)]
pub struct TestPublisher {
    published: RwLock<Vec<PublishedMessage>>,
    failures: HashSet<usize>,
    calls: AtomicUsize,
}

impl TestPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the publish calls at the given 0-based indexes.
    pub fn with_failures(failures: impl IntoIterator<Item = usize>) -> Self {
        Self {
            failures: failures.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Get all recorded messages.
    pub fn published_messages(&self) -> Vec<PublishedMessage> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Get recorded messages for a specific subject.
    pub fn messages_for_subject(&self, subject: &str) -> Vec<PublishedMessage> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|m| m.subject == subject)
            .cloned()
            .collect()
    }

    /// Get the count of recorded messages.
    pub fn publish_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

#[async_trait]
impl EventPublisher for TestPublisher {
    async fn publish(&self, subject: String, payload: Bytes) -> Result<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failures.contains(&call) {
            bail!("injected publish failure on call {call}");
        }

        self.published
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(PublishedMessage { subject, payload });
        Ok(())
    }
}
