//! Named markup patterns used by the extraction strategies.
//!
//! Each function answers one structural question about a page ("the divs whose
//! class mentions X", "the meta description") and returns raw HTML slices. The
//! strategies only talk to these functions, so a structural parser can replace
//! the regexes here without touching strategy code.
//!
//! Element bodies are closed at the *balancing* end tag, so nested containers
//! are captured whole. Unclosed elements run to the end of the document.

use regex::{Match, Regex};
use std::sync::LazyLock;

static DIV_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<div\b[^>]*>").expect("valid regex"));

static DIV_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<(/)?div\b[^>]*>").expect("valid regex"));

static SECTION_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<section\b[^>]*>").expect("valid regex"));

static SECTION_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(/)?section\b[^>]*>").expect("valid regex"));

static ARTICLE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<article\b[^>]*>").expect("valid regex"));

static ARTICLE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(/)?article\b[^>]*>").expect("valid regex"));

static META_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<meta\b[^>]*>").expect("valid regex"));

/// Quoted attribute inside an opening tag. The name must follow whitespace, so
/// `data-class` is never read as `class`.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});

/// Class fragments that mark a `<section>` as description content.
const SECTION_CLASS_HINTS: [&str; 3] = ["description", "details", "content"];

/// Value of the first attribute called `name` (ASCII case-insensitive) in an opening tag.
fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    ATTRIBUTE.captures_iter(tag).find_map(|caps| {
        let key = caps.get(1)?;
        if !key.as_str().eq_ignore_ascii_case(name) {
            return None;
        }
        caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str())
    })
}

fn class_contains(tag: &str, needle: &str) -> bool {
    attribute(tag, "class").is_some_and(|class| class.contains(needle))
}

/// Bodies of every element opened by `open`, in document order.
///
/// `open` finds candidate opening tags and `wanted` filters them. `boundary`
/// must match both the opening and closing tag of the same element name, with
/// capture group 1 present only on closing tags. Elements nested in an earlier
/// match are not reported again.
fn element_bodies<'a>(
    html: &'a str, open: &Regex, boundary: &Regex, wanted: impl Fn(&Match<'a>) -> bool,
) -> Vec<&'a str> {
    let mut bodies = Vec::new();
    let mut resume = 0;

    for tag in open.find_iter(html) {
        if tag.start() < resume || !wanted(&tag) {
            continue;
        }

        let body_start = tag.end();
        let mut body_end = html.len();
        let mut after = html.len();
        let mut depth = 1usize;

        for caps in boundary.captures_iter(&html[body_start..]) {
            let Some(whole) = caps.get(0) else { continue };
            if caps.get(1).is_some() {
                depth -= 1;
                if depth == 0 {
                    body_end = body_start + whole.start();
                    after = body_start + whole.end();
                    break;
                }
            } else {
                depth += 1;
            }
        }

        bodies.push(&html[body_start..body_end]);
        resume = after;
    }

    bodies
}

/// Inner HTML of `<div>`s whose class attribute contains `needle` (case-sensitive).
pub fn divs_with_class<'a>(html: &'a str, needle: &str) -> Vec<&'a str> {
    element_bodies(html, &DIV_OPEN, &DIV_BOUNDARY, |tag| class_contains(tag.as_str(), needle))
}

/// Inner HTML of the first `<div>` whose class attribute contains `needle`.
pub fn first_div_with_class<'a>(html: &'a str, needle: &str) -> Option<&'a str> {
    divs_with_class(html, needle).into_iter().next()
}

/// Inner HTML of the first `<div id="<id>">`.
pub fn div_with_id<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    element_bodies(html, &DIV_OPEN, &DIV_BOUNDARY, |tag| attribute(tag.as_str(), "id") == Some(id))
        .into_iter()
        .next()
}

/// Inner HTML of `<section>`s whose class mentions description, details or content.
pub fn description_sections(html: &str) -> Vec<&str> {
    element_bodies(html, &SECTION_OPEN, &SECTION_BOUNDARY, |tag| {
        SECTION_CLASS_HINTS.iter().any(|hint| class_contains(tag.as_str(), hint))
    })
}

/// Inner HTML of every `<article>`.
pub fn articles(html: &str) -> Vec<&str> {
    element_bodies(html, &ARTICLE_OPEN, &ARTICLE_BOUNDARY, |_| true)
}

/// Raw `content` of the first `<meta name|property="description"|"og:description">`.
///
/// Attribute order does not matter and names match case-insensitively. The
/// value is returned undecoded.
pub fn meta_description(html: &str) -> Option<&str> {
    META_OPEN.find_iter(html).find_map(|tag| {
        let tag = tag.as_str();
        let is_description = ["name", "property"]
            .iter()
            .filter_map(|key| attribute(tag, key))
            .any(|v| v.eq_ignore_ascii_case("description") || v.eq_ignore_ascii_case("og:description"));
        if !is_description {
            return None;
        }
        attribute(tag, "content")
    })
}
