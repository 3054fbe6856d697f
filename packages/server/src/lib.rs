// Jobcast - Job Discovery Engine
//
// This crate provides the backend service that turns a search request into a
// site-scoped web query, extracts structured job postings from the raw
// results, and publishes one durable job-created event per posting.
//
// Domain logic lives in domains/jobs; broker plumbing in kernel/.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
