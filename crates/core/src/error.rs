//! Unified error types for jobpost.
//!
//! Only three conditions ever reach a caller. Strategy-level parse failures are
//! absorbed inside the extraction chain and never surface here.

use rmcp::model::{ErrorCode, ErrorData as McpError};
use serde_json::json;

/// Coarse classification of an [`Error`], for callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    FetchFailed,
    ExtractionFailed,
}

/// Unified error types for the jobpost service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The caller supplied a URL that cannot be fetched (empty, unparseable, bad scheme).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The page could not be fetched: a non-success status or a transport failure.
    #[error("FETCH_FAILED: could not fetch the page: {cause}")]
    FetchFailed { status: Option<u16>, cause: String },

    /// The page was fetched but no strategy produced a description.
    #[error("EXTRACT_FAILED: could not extract a description from {url}")]
    ExtractionFailed { url: String },
}

impl Error {
    /// Build a `FetchFailed` for a non-success upstream status.
    pub fn status(code: u16) -> Self {
        Error::FetchFailed { status: Some(code), cause: format!("upstream returned status {code}") }
    }

    /// Build a `FetchFailed` for a transport-level failure (no status available).
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Error::FetchFailed { status: None, cause: cause.to_string() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::FetchFailed { .. } => ErrorKind::FetchFailed,
            Error::ExtractionFailed { .. } => ErrorKind::ExtractionFailed,
        }
    }

    /// Upstream HTTP status carried by a `FetchFailed`, if any.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Error::FetchFailed { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        let (code, data) = match &err {
            Error::InvalidInput(_) => (-32602, None),
            Error::FetchFailed { status, .. } => (-32008, status.map(|s| json!({ "status": s }))),
            Error::ExtractionFailed { .. } => (-32000, None),
        };

        McpError { code: ErrorCode(code), message: message.into(), data }
    }
}
