//! Lever job pages.

use super::patterns::divs_with_class;
use super::sanitize::{MAX_DESCRIPTION_CHARS, sanitize, truncate_chars};

const MAX_CONTENT_BLOCKS: usize = 3;
const MAX_SECTION_BLOCKS: usize = 5;

/// Join the first three `content` divs, or failing that the first five `section` divs.
pub fn extract(html: &str) -> Option<String> {
    let content = divs_with_class(html, "content");
    if !content.is_empty() {
        return join_blocks(&content, MAX_CONTENT_BLOCKS);
    }

    let sections = divs_with_class(html, "section");
    if !sections.is_empty() {
        return join_blocks(&sections, MAX_SECTION_BLOCKS);
    }

    None
}

fn join_blocks(blocks: &[&str], limit: usize) -> Option<String> {
    let parts: Vec<String> = blocks
        .iter()
        .take(limit)
        .map(|block| sanitize(block))
        .filter(|text| !text.is_empty())
        .collect();

    if parts.is_empty() {
        return None;
    }

    Some(truncate_chars(&parts.join("\n\n"), MAX_DESCRIPTION_CHARS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_blocks_joined() {
        let html = r#"
            <div class="section-wrapper page-full-width">
              <div class="posting-headline"><h2>Backend Engineer</h2></div>
            </div>
            <div class="content"><p>Intro paragraph.</p></div>
            <div class="posting-content"><ul><li>Rust</li></ul></div>
        "#;
        assert_eq!(extract(html).as_deref(), Some("Intro paragraph.\n\n• Rust"));
    }

    #[test]
    fn test_only_first_three_content_blocks() {
        let html = (1..=5).map(|i| format!("<div class=\"content\">Block {i}</div>")).collect::<String>();
        let out = extract(&html).unwrap();
        assert_eq!(out, "Block 1\n\nBlock 2\n\nBlock 3");
    }

    #[test]
    fn test_section_fallback_takes_five() {
        let html = (1..=7).map(|i| format!("<div class=\"section page\">Part {i}</div>")).collect::<String>();
        let out = extract(&html).unwrap();
        assert!(out.contains("Part 5"));
        assert!(!out.contains("Part 6"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract("<div class=\"header\">Lever</div>"), None);
    }

    #[test]
    fn test_empty_content_blocks_yield_nothing() {
        let html = r#"<div class="content"> </div><div class="section">ignored</div>"#;
        assert_eq!(extract(html), None);
    }
}
