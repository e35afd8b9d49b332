//! Job-description extraction from fetched HTML.
//!
//! ### Strategy chain
//! - The URL's [`Platform`] selects at most one platform strategy.
//! - If it yields nothing, the generic strategy runs. A platform strategy
//!   never hands off to another platform's strategy.
//! - Strategies never fail: malformed markup or embedded data is absorbed
//!   and reported as "no result".
//!
//! ### Output
//! - Plain text produced by [`sanitize`], capped at [`MAX_DESCRIPTION_CHARS`].

pub mod comeet;
pub mod generic;
pub mod greenhouse;
pub mod lever;
pub mod linkedin;
pub mod patterns;
pub mod sanitize;

pub use sanitize::{MAX_DESCRIPTION_CHARS, sanitize};

use jobpost_core::Platform;

/// Platform-specific extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Comeet,
    Lever,
    Greenhouse,
    Linkedin,
}

impl Strategy {
    /// The strategy for a detected platform; `Generic` has none.
    pub fn for_platform(platform: Platform) -> Option<Self> {
        match platform {
            Platform::Comeet => Some(Strategy::Comeet),
            Platform::Lever => Some(Strategy::Lever),
            Platform::Greenhouse => Some(Strategy::Greenhouse),
            Platform::Linkedin => Some(Strategy::Linkedin),
            Platform::Generic => None,
        }
    }

    pub fn extract(&self, html: &str) -> Option<String> {
        match self {
            Strategy::Comeet => comeet::extract(html),
            Strategy::Lever => lever::extract(html),
            Strategy::Greenhouse => greenhouse::extract(html),
            Strategy::Linkedin => linkedin::extract(html),
        }
    }
}

/// Run the platform strategy (if any), then the generic fallback.
pub fn extract_description(platform: Platform, html: &str) -> Option<String> {
    if let Some(strategy) = Strategy::for_platform(platform) {
        if let Some(text) = strategy.extract(html) {
            tracing::debug!(?strategy, chars = text.chars().count(), "platform strategy matched");
            return Some(text);
        }
        tracing::debug!(?strategy, "platform strategy found nothing; trying generic patterns");
    }

    generic::extract(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_for_platform() {
        assert_eq!(Strategy::for_platform(Platform::Lever), Some(Strategy::Lever));
        assert_eq!(Strategy::for_platform(Platform::Linkedin), Some(Strategy::Linkedin));
        assert_eq!(Strategy::for_platform(Platform::Generic), None);
    }

    #[test]
    fn test_platform_strategy_wins() {
        let html = r#"<div id="content"><p>Greenhouse body</p></div>"#;
        assert_eq!(extract_description(Platform::Greenhouse, html).as_deref(), Some("Greenhouse body"));
    }

    #[test]
    fn test_falls_back_to_generic() {
        let body = "Long enough generic description. ".repeat(5);
        let html = format!(r#"<div class="job-details">{body}</div>"#);
        let out = extract_description(Platform::Greenhouse, &html).unwrap();
        assert_eq!(out, body.trim());
    }

    #[test]
    fn test_no_cross_platform_fallback() {
        // Lever markup on a Greenhouse URL: Lever strategy must not run.
        let html = r#"<div class="content">Short lever text</div>"#;
        assert_eq!(extract_description(Platform::Greenhouse, html), None);
        assert_eq!(extract_description(Platform::Lever, html).as_deref(), Some("Short lever text"));
    }

    #[test]
    fn test_generic_platform_uses_generic_only() {
        let html = r#"<div id="content">Greenhouse-looking content</div>"#;
        assert_eq!(extract_description(Platform::Generic, html), None);
    }

    #[test]
    fn test_meta_floor_overall() {
        let html = format!(r#"<meta name="description" content="{}">"#, "m".repeat(80));
        assert_eq!(extract_description(Platform::Generic, &html), Some("m".repeat(80)));

        let html = format!(r#"<meta name="description" content="{}">"#, "m".repeat(30));
        assert_eq!(extract_description(Platform::Generic, &html), None);
    }

    #[test]
    fn test_malformed_input_never_panics() {
        let inputs = [
            "",
            "<",
            "<div class=\"content",
            "<div class=\"content\">",
            "POSITION_DATA = ",
            "POSITION_DATA = {\"description\": \"unterminated",
            "<meta name=\"description\" content=\"",
            "</div></div></div>",
            "<section class=\"details\"><section>",
        ];
        for platform in [Platform::Comeet, Platform::Lever, Platform::Greenhouse, Platform::Linkedin, Platform::Generic]
        {
            for input in inputs {
                let _ = extract_description(platform, input);
            }
        }
    }
}
