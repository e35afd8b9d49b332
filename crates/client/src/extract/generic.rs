//! Fallback extraction for unknown sites, and for known platforms whose own
//! strategy found nothing.

use super::patterns::{articles, description_sections, divs_with_class, meta_description};
use super::sanitize::sanitize;

/// Class fragments that mark a job-description container, most specific first.
const DESCRIPTION_CLASSES: [&str; 5] = ["job-description", "jobDescription", "description", "job-details", "jobDetails"];

/// Body candidates shorter than this are navigation shells, not descriptions.
const MIN_BODY_CHARS: usize = 100;

/// Raw meta descriptions must be longer than this to be used.
const MIN_META_CHARS: usize = 50;

pub fn extract(html: &str) -> Option<String> {
    let candidates = DESCRIPTION_CLASSES
        .iter()
        .flat_map(|class| divs_with_class(html, class))
        .chain(description_sections(html))
        .chain(articles(html));

    for candidate in candidates {
        let text = sanitize(candidate);
        if text.chars().count() > MIN_BODY_CHARS {
            return Some(text);
        }
    }

    meta_description(html)
        .filter(|raw| raw.chars().count() > MIN_META_CHARS)
        .map(sanitize)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(n: usize) -> String {
        "x".repeat(n)
    }

    #[test]
    fn test_job_description_div() {
        let body = format!("<p>{}</p>", filler(150));
        let html = format!(r#"<nav class="description">Menu</nav><div class="job-description">{body}</div>"#);
        assert_eq!(extract(&html), Some(filler(150)));
    }

    #[test]
    fn test_short_candidates_rejected() {
        let html = format!(
            r#"<div class="description">Share</div><section class="details">{}</section>"#,
            filler(120)
        );
        assert_eq!(extract(&html), Some(filler(120)));
    }

    #[test]
    fn test_threshold_is_strict() {
        let html = format!("<article>{}</article>", filler(100));
        assert_eq!(extract(&html), None);
        let html = format!("<article>{}</article>", filler(101));
        assert_eq!(extract(&html), Some(filler(101)));
    }

    #[test]
    fn test_class_order() {
        let html = format!(
            r#"<div class="jobDetails">{}</div><div class="jobDescription">{}</div>"#,
            "d".repeat(200),
            "j".repeat(200)
        );
        assert_eq!(extract(&html), Some("j".repeat(200)));
    }

    #[test]
    fn test_article_fallback() {
        let html = format!("<div class=\"wrapper\"><article><h1>Title</h1><p>{}</p></article></div>", filler(110));
        assert_eq!(extract(&html), Some(format!("Title\n{}", filler(110))));
    }

    #[test]
    fn test_meta_accepted_above_floor() {
        let text = "a".repeat(80);
        let html = format!(r#"<head><meta name="description" content="{text}"></head><body><p>short</p></body>"#);
        assert_eq!(extract(&html), Some(text));
    }

    #[test]
    fn test_meta_rejected_below_floor() {
        let html = format!(r#"<meta name="description" content="{}">"#, "a".repeat(30));
        assert_eq!(extract(&html), None);
        let html = format!(r#"<meta name="description" content="{}">"#, "a".repeat(50));
        assert_eq!(extract(&html), None);
    }

    #[test]
    fn test_nothing() {
        assert_eq!(extract("<html><body><p>Hello</p></body></html>"), None);
        assert_eq!(extract("<<<>>>"), None);
    }
}
