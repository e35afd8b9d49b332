//! job_description tool implementation.
//!
//! Fetches a job posting (or serves it from cache) and returns the extracted
//! plain-text description together with the detected platform.

use jobpost_client::{JobDescription, JobService};
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the job_description tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JobDescriptionParams {
    /// Absolute http(s) URL of the job posting
    pub url: String,

    /// Bypass the cache and fetch the page again
    #[serde(default)]
    pub force_refresh: bool,
}

/// Implementation of the job_description tool.
///
/// Output is a [`JobDescription`] serialized as pretty JSON:
/// `{ "description", "platform", "cached" }`.
pub async fn describe_impl(service: &JobService, params: JobDescriptionParams) -> Result<CallToolResult, McpError> {
    let job: JobDescription = if params.force_refresh {
        service.refresh(&params.url).await?
    } else {
        service.describe(&params.url).await?
    };

    tracing::info!(
        url = %params.url.trim(),
        platform = %job.platform,
        cached = job.cached,
        chars = job.description.chars().count(),
        "job_description"
    );

    let json = serde_json::to_string_pretty(&job)
        .map_err(|e| McpError::internal_error(format!("failed to serialize output: {e}"), None))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
