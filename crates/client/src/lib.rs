//! Client code for jobpost.
//!
//! This crate provides the HTTP fetch pipeline, the job-description strategy
//! chain, and the cache-aware service shared by the server.

pub mod extract;
pub mod fetch;
pub mod service;

pub use extract::{MAX_DESCRIPTION_CHARS, Strategy, extract_description, sanitize};
pub use fetch::{FetchClient, FetchConfig, PageSource, UrlError, validate_url};
pub use service::{ExtractionResult, JobDescription, JobService, extract_job};
