//! Request URL validation.
//!
//! The URL is checked for syntax only. Callers key the cache on the string they
//! were given, so nothing here rewrites it for caching purposes.

use jobpost_core::Error;

/// Error type for URL validation failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<UrlError> for Error {
    fn from(err: UrlError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

/// Parse a caller-supplied job URL.
///
/// Leading/trailing whitespace is ignored; only `http` and `https` are accepted.
pub fn validate_url(input: &str) -> Result<url::Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlError::InvalidUrl("missing host".into()));
    }

    Ok(parsed)
}
