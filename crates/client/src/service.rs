//! Fetch orchestration and the cache-aware job description service.
//!
//! `describe` flow: validate URL → cache lookup → on miss fetch, detect platform,
//! run the strategy chain → store → return.

use jobpost_core::{AppConfig, DescriptionCache, Error, Platform};
use reqwest::Url;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::extract::extract_description;
use crate::fetch::{FetchClient, FetchConfig, PageSource, validate_url};

/// A freshly extracted description and the platform it was extracted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub description: String,
    pub platform: Platform,
}

/// Caller-facing answer for one job URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JobDescription {
    /// Plain-text job description.
    pub description: String,
    /// Platform detected from the URL.
    pub platform: Platform,
    /// Whether the description was served from cache.
    pub cached: bool,
}

/// Fetch a page and run the strategy chain over it.
///
/// # Errors
///
/// - `FetchFailed` if the page cannot be fetched or returns a non-success status.
/// - `ExtractionFailed` if no strategy produced text.
pub async fn extract_job(source: &dyn PageSource, url: &Url) -> Result<ExtractionResult, Error> {
    let platform = Platform::detect(url.as_str());
    tracing::debug!(%platform, "extracting job description from {}", url);

    let html = source.fetch_html(url).await?;

    let start = Instant::now();
    let description =
        extract_description(platform, &html).ok_or_else(|| Error::ExtractionFailed { url: url.to_string() })?;
    tracing::debug!(%platform, extract_ms = start.elapsed().as_millis() as u64, "extracted description from {}", url);

    Ok(ExtractionResult { description, platform })
}

/// Cache-aware job description service.
#[derive(Clone)]
pub struct JobService {
    source: Arc<dyn PageSource>,
    cache: DescriptionCache,
}

impl JobService {
    pub fn new(source: Arc<dyn PageSource>, cache: DescriptionCache) -> Self {
        Self { source, cache }
    }

    /// Build a service backed by a real [`FetchClient`] and a fresh cache.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        let client = FetchClient::new(&FetchConfig::from(config))?;
        Ok(Self::new(Arc::new(client), DescriptionCache::new(config.cache_ttl())))
    }

    /// The shared cache, e.g. for starting a sweeper or purging entries.
    pub fn cache(&self) -> &DescriptionCache {
        &self.cache
    }

    /// Describe the job at `url`, serving from cache when a fresh entry exists.
    ///
    /// The cache key is the caller's URL string with surrounding whitespace
    /// removed. Concurrent misses for the same URL each fetch; the last write wins.
    pub async fn describe(&self, url: &str) -> Result<JobDescription, Error> {
        let key = url.trim();
        let parsed = validate_url(key)?;

        if let Some(description) = self.cache.get(key).await {
            return Ok(JobDescription { description, platform: Platform::detect(key), cached: true });
        }

        self.fetch_and_store(key, &parsed).await
    }

    /// Like [`describe`](Self::describe) but always fetches, then overwrites the cache entry.
    pub async fn refresh(&self, url: &str) -> Result<JobDescription, Error> {
        let key = url.trim();
        let parsed = validate_url(key)?;
        self.fetch_and_store(key, &parsed).await
    }

    async fn fetch_and_store(&self, key: &str, url: &Url) -> Result<JobDescription, Error> {
        let result = extract_job(self.source.as_ref(), url).await?;
        self.cache.put(key, result.description.clone()).await;

        Ok(JobDescription { description: result.description, platform: result.platform, cached: false })
    }
}
