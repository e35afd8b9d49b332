//! HTML fragment to plain text.
//!
//! Steps, in order:
//! 1. Structural boundaries become line breaks (`<br>`, `</p>`, block closes,
//!    list items get a leading bullet).
//! 2. Every remaining tag is stripped.
//! 3. A fixed set of named entities plus numeric references are decoded. Tags
//!    that only appear once decoded are stripped too, and decoding repeats
//!    until nothing changes, so double-encoded input comes out fully decoded.
//! 4. Runs of 3+ newlines collapse to a blank line; horizontal whitespace
//!    collapses to one space, and no line starts or ends with a space.
//! 5. Leading/trailing whitespace is trimmed.
//! 6. Output is capped at [`MAX_DESCRIPTION_CHARS`].
//!
//! A "tag" is `<` followed by a letter, `/`, `!` or `?`. A bare `<` or `>` in
//! text such as `<$100k` or `>10%` is kept.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Upper bound on the length of any extracted description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 3000;

/// Marker placed before each list item.
const BULLET: &str = "• ";

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));

static PARAGRAPH_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</p\s*>").expect("valid regex"));

static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(?:div|h[1-6]|section|article|header|footer|ul|ol|table|tr|blockquote)\s*>")
        .expect("valid regex")
});

static LIST_ITEM_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</li\s*>").expect("valid regex"));

static LIST_ITEM_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<li\b[^>]*>").expect("valid regex"));

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?:/?[A-Za-z][^<>]*|!--.*?--|[!?][^<>]*)>").expect("valid regex")
});

/// A character reference without its leading `&`, anchored at the start.
static REFERENCE_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(nbsp|amp|lt|gt|quot|apos)|#([0-9]{1,7})|#[xX]([0-9a-fA-F]{1,6}));").expect("valid regex")
});

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r\f]*\n(?:[ \t\r\f]*\n){2,}[ \t\r\f]*").expect("valid regex"));

static HORIZONTAL_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\r\f\x0B]+").expect("valid regex"));

static LINE_EDGE_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" ?\n ?").expect("valid regex"));

/// Convert an HTML fragment into clean plain text.
///
/// Pure and total: any input yields a string of at most
/// [`MAX_DESCRIPTION_CHARS`] characters with no markup or decodable entity
/// left in it. The output is a fixed point: `sanitize(&sanitize(x)) == sanitize(x)`.
pub fn sanitize(html: &str) -> String {
    let text = LINE_BREAK.replace_all(html, "\n");
    let text = PARAGRAPH_CLOSE.replace_all(&text, "\n\n");
    let text = BLOCK_CLOSE.replace_all(&text, "\n");
    let text = LIST_ITEM_CLOSE.replace_all(&text, "\n");
    let text = LIST_ITEM_OPEN.replace_all(&text, BULLET);

    let mut text = strip_tags(&text);
    // every round shrinks the text until it holds no tag and no reference
    loop {
        let next = strip_tags(&decode_entities(&text));
        if next == text {
            break;
        }
        text = next;
    }

    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    let text = LINE_EDGE_SPACE.replace_all(&text, "\n");

    truncate_chars(text.trim(), MAX_DESCRIPTION_CHARS)
}

/// Remove tags until none are left; removing `<b>` from `<<b>b>` exposes another.
fn strip_tags(text: &str) -> String {
    let mut current = TAG.replace_all(text, "").into_owned();
    while TAG.is_match(&current) {
        current = TAG.replace_all(&current, "").into_owned();
    }
    current
}

/// Decode the supported named entities and any numeric character reference.
///
/// Decoding repeats until the text no longer changes, so `&amp;lt;` becomes
/// `<`. Invalid code points are left untouched.
pub fn decode_entities(text: &str) -> String {
    let mut current = decode_pass(text);
    loop {
        let next = decode_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One left-to-right pass. An `&` produced by `&amp;` is tried against the
/// text that follows it, so chains like `&amp;amp;amp;` resolve here.
fn decode_pass(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        rest = &rest[at + 1..];

        loop {
            let Some(caps) = REFERENCE_BODY.captures(rest) else {
                out.push('&');
                break;
            };
            let consumed = caps[0].len();
            match decode_reference(&caps) {
                Some('&') => rest = &rest[consumed..],
                Some(c) => {
                    out.push(c);
                    rest = &rest[consumed..];
                    break;
                }
                None => {
                    out.push('&');
                    break;
                }
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_reference(caps: &Captures) -> Option<char> {
    if let Some(name) = caps.get(1) {
        return Some(match name.as_str() {
            "nbsp" => ' ',
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            _ => '\'',
        });
    }

    let code = match (caps.get(2), caps.get(3)) {
        (Some(dec), _) => dec.as_str().parse::<u32>().ok(),
        (None, Some(hex)) => u32::from_str_radix(hex.as_str(), 16).ok(),
        _ => None,
    };
    code.and_then(char::from_u32)
}

/// Keep at most `max` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].trim_end().to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_paragraphs_and_breaks() {
        let out = sanitize("<p>First paragraph.</p><p>Second<br/>line.</p>");
        assert_eq!(out, "First paragraph.\n\nSecond\nline.");
    }

    #[test]
    fn test_sanitize_list_items() {
        let out = sanitize("<ul><li>Rust</li><li class=\"x\">Tokio</li></ul>");
        assert_eq!(out, "• Rust\n• Tokio");
    }

    #[test]
    fn test_sanitize_strips_tags() {
        let out = sanitize("<div><span style=\"color:red\">Hello</span> <b>world</b></div>");
        assert_eq!(out, "Hello world");
    }

    #[test]
    fn test_sanitize_named_entities() {
        let out = sanitize("Tom&nbsp;&amp;&nbsp;Jerry &quot;say&quot; it&#39;s &apos;fine&apos;");
        assert_eq!(out, "Tom & Jerry \"say\" it's 'fine'");
    }

    #[test]
    fn test_sanitize_numeric_entities() {
        assert_eq!(sanitize("caf&#233; &#x2014; na&#X EF;ve"), "café — na&#X EF;ve");
        assert_eq!(sanitize("&#x1F600;"), "😀");
    }

    #[test]
    fn test_decode_invalid_code_point_left_alone() {
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
        assert_eq!(decode_entities("&#9999999;"), "&#9999999;");
    }

    #[test]
    fn test_decode_nested_references() {
        assert_eq!(decode_entities("&amp;lt;"), "<");
        assert_eq!(decode_entities("AT&amp;amp;amp;T"), "AT&T");
        assert_eq!(decode_entities("&lt&#59;"), "<");
        assert_eq!(decode_entities("&amp;#xD800;"), "&#xD800;");
        assert_eq!(decode_entities("a & b && c"), "a & b && c");
    }

    #[test]
    fn test_sanitize_keeps_comparison_text() {
        let out = sanitize("<p>Salary &lt;$100k, bonus &gt;10% of base</p>");
        assert_eq!(out, "Salary <$100k, bonus >10% of base");
        assert_eq!(sanitize("<li>Team size: 5 < n > 2</li>"), "• Team size: 5 < n > 2");
    }

    #[test]
    fn test_sanitize_strips_tags_exposed_by_stripping() {
        assert_eq!(sanitize("x<<b>b>y"), "xy");
        assert_eq!(sanitize("a<!-- note -->b<!DOCTYPE html>c"), "abc");
    }

    #[test]
    fn test_sanitize_encoded_markup_removed() {
        let out = sanitize("&lt;script&gt;alert(1)&lt;/script&gt; salary &lt; 100k");
        assert!(!out.contains("<script"));
        assert!(out.contains("alert(1)"));
    }

    #[test]
    fn test_sanitize_collapses_newlines() {
        let out = sanitize("<p>One</p>\n\n\n  \n<p>Two</p>");
        assert_eq!(out, "One\n\nTwo");
    }

    #[test]
    fn test_sanitize_collapses_horizontal_whitespace() {
        assert_eq!(sanitize("a \t  b\t\tc"), "a b c");
    }

    #[test]
    fn test_sanitize_no_indented_lines() {
        let out = sanitize("<h2>Role</h2>\n      <p>Details here.</p>");
        assert_eq!(out, "Role\n\nDetails here.");
    }

    #[test]
    fn test_sanitize_trims() {
        assert_eq!(sanitize("  <div>  padded  </div>  "), "padded");
    }

    #[test]
    fn test_sanitize_truncates() {
        let long = "word ".repeat(2000);
        let out = sanitize(&long);
        assert!(out.chars().count() <= MAX_DESCRIPTION_CHARS);
        assert!(out.starts_with("word word"));
    }

    #[test]
    fn test_sanitize_truncates_multibyte() {
        let long = "é".repeat(5000);
        let out = sanitize(&long);
        assert_eq!(out.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_sanitize_length_bound_on_varied_inputs() {
        let inputs = [
            String::new(),
            "<".repeat(10_000),
            "&amp;".repeat(4000),
            "<li>x</li>".repeat(3000),
            "\n".repeat(9000),
            "<p>".repeat(100) + &"ü".repeat(3500),
        ];
        for input in &inputs {
            assert!(sanitize(input).chars().count() <= MAX_DESCRIPTION_CHARS);
        }
    }

    #[test]
    fn test_sanitize_idempotent_on_clean_output() {
        let html = r#"
            <div class="content">
              <h2>About the role</h2>
              <p>We build   tools &amp; infrastructure.</p>
              <ul><li>Rust</li><li>Postgres</li></ul>
              <p>Apply&nbsp;now!</p>
            </div>"#;
        let once = sanitize(html);
        let twice = sanitize(&once);
        assert_eq!(once, twice);

        let long = sanitize(&"<p>lorem ipsum dolor</p>".repeat(400));
        assert_eq!(sanitize(&long), long);

        for html in [
            "AT&amp;amp;T &amp;lt;b&amp;gt;Rust&amp;lt;/b&amp;gt;",
            "<p>Salary &lt;$100k, bonus &gt;10% of base</p>",
            "&amp;lt;script&amp;gt;x&amp;lt;/script&amp;gt; &amp;amp;nbsp;",
            "&am<b>p;lt;i&gt;y",
        ] {
            let once = sanitize(html);
            assert_eq!(sanitize(&once), once, "not a fixed point for {html:?}");
        }
        assert_eq!(sanitize("AT&amp;amp;T &amp;lt;b&amp;gt;Rust&amp;lt;/b&amp;gt;"), "AT&T Rust");
    }

    #[test]
    fn test_sanitize_unclosed_tag() {
        let out = sanitize("Text before <div class=\"broken");
        assert_eq!(out, "Text before <div class=\"broken");
        let out = sanitize("<p>ok</p><");
        assert_eq!(out, "ok\n\n<");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab cd", 3), "ab");
    }
}
