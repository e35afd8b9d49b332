//! MCP tool implementations.
//!
//! This module contains all tools exposed by the jobpost server.

pub mod cache_purge;
pub mod job_description;

#[cfg(test)]
pub(crate) mod test_support;
