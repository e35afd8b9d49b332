//! cache_purge tool implementation.
//!
//! Removes one cached description by URL, or sweeps every expired entry.

use jobpost_core::DescriptionCache;
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the cache_purge tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeParams {
    /// URL whose cached description should be removed; omit to sweep expired entries
    #[serde(default)]
    pub url: Option<String>,
}

/// Output from the cache_purge tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeOutput {
    /// Number of entries deleted
    pub deleted: usize,
}

/// Implementation of the cache_purge tool.
pub async fn purge_impl(cache: &DescriptionCache, params: CachePurgeParams) -> Result<CallToolResult, McpError> {
    let deleted = match params.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => usize::from(cache.remove(url).await),
        _ => cache.purge_expired().await,
    };

    tracing::info!(deleted, "cache_purge");

    let output = CachePurgeOutput { deleted };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| McpError::internal_error(format!("failed to serialize output: {e}"), None))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
