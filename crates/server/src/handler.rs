//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::cache_purge::{CachePurgeParams, purge_impl};
use crate::tools::job_description::{JobDescriptionParams, describe_impl};

use jobpost_client::JobService;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for jobpost.
#[derive(Clone)]
pub struct JobPostServer {
    service: JobService,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl JobPostServer {
    /// Create a new server handler around a shared job service.
    pub fn new(service: JobService) -> Self {
        Self { service, tool_router: Self::tool_router() }
    }

    /// Extract the description of a job posting.
    ///
    /// Detects the hosting platform from the URL, fetches the page (unless a
    /// fresh cached copy exists) and returns plain text.
    #[tool(
        description = "Extract a plain-text job description from a posting URL (Comeet, Lever, Greenhouse, LinkedIn or any site). Returns description, detected platform and whether it came from cache."
    )]
    async fn job_description(&self, params: Parameters<JobDescriptionParams>) -> Result<CallToolResult, McpError> {
        describe_impl(&self.service, params.0).await
    }

    /// Evict cached descriptions.
    #[tool(
        description = "Remove a cached job description by URL, or sweep all expired entries when no URL is given. Returns the number of deleted entries."
    )]
    async fn cache_purge(&self, params: Parameters<CachePurgeParams>) -> Result<CallToolResult, McpError> {
        purge_impl(self.service.cache(), params.0).await
    }
}

impl ServerHandler for JobPostServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "jobpost".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
