//! Kernel module - infrastructure seams shared across domains.

pub mod nats;

pub use nats::{
    EventPublisher, JetStreamPublisher, PublishedMessage, TestPublisher, JOB_EVENTS_STREAM,
    JOB_EVENTS_SUBJECTS,
};
