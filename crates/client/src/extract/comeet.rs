//! Comeet job pages.
//!
//! Comeet ships the posting as a JSON object assigned to `POSITION_DATA` in an
//! inline script. Its `details` list holds the ad's labelled sections.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use super::patterns::meta_description;
use super::sanitize::{MAX_DESCRIPTION_CHARS, sanitize, truncate_chars};

static POSITION_DATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bPOSITION_DATA\s*=\s*").expect("valid regex"));

static SCRIPT_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</script").expect("valid regex"));

static LOOSE_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""description"\s*:\s*"((?:[^"\\]|\\.)*)""#).expect("valid regex"));

#[derive(Debug, Deserialize)]
struct PositionData {
    #[serde(default)]
    details: Option<Vec<Detail>>,
    #[serde(default)]
    custom_fields: Option<CustomFields>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CustomFields {
    #[serde(default)]
    details: Vec<Detail>,
}

#[derive(Debug, Deserialize)]
struct Detail {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

pub fn extract(html: &str) -> Option<String> {
    let from_data = position_block(html).and_then(|block| match parse_position(block) {
        Some(position) => from_position(&position),
        None => {
            tracing::warn!("POSITION_DATA is not valid JSON; falling back to loose description match");
            loose_description(block)
        }
    });

    from_data.or_else(|| meta_description(html).map(sanitize).filter(|text| !text.is_empty()))
}

/// Raw script text following the `POSITION_DATA =` assignment, up to `</script>`.
fn position_block(html: &str) -> Option<&str> {
    let start = POSITION_DATA.find(html)?.end();
    let rest = &html[start..];
    let end = SCRIPT_CLOSE.find(rest).map_or(rest.len(), |m| m.start());
    Some(&rest[..end])
}

/// Strictly parse the first JSON value of the block; trailing script is ignored.
fn parse_position(block: &str) -> Option<PositionData> {
    serde_json::Deserializer::from_str(block).into_iter::<PositionData>().next()?.ok()
}

fn from_position(position: &PositionData) -> Option<String> {
    let details = position
        .details
        .as_deref()
        .filter(|d| !d.is_empty())
        .or_else(|| position.custom_fields.as_ref().map(|c| c.details.as_slice()));

    if let Some(text) = details.and_then(render_details) {
        return Some(text);
    }

    position.description.as_deref().map(sanitize).filter(|text| !text.is_empty())
}

/// Render each `{name, value}` pair as a bold label over its text, separated by blank lines.
fn render_details(details: &[Detail]) -> Option<String> {
    let sections: Vec<String> = details
        .iter()
        .filter_map(|detail| {
            let value = sanitize(detail.value.as_deref()?);
            if value.is_empty() {
                return None;
            }
            match detail.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
                Some(name) => Some(format!("**{name}**\n{value}")),
                None => Some(value),
            }
        })
        .collect();

    if sections.is_empty() {
        return None;
    }

    Some(truncate_chars(&sections.join("\n\n"), MAX_DESCRIPTION_CHARS))
}

/// Pull a single `"description": "..."` string out of text that is not valid JSON.
fn loose_description(block: &str) -> Option<String> {
    let raw = LOOSE_DESCRIPTION.captures(block)?.get(1)?.as_str();
    let unescaped = serde_json::from_str::<String>(&format!("\"{raw}\"")).unwrap_or_else(|_| unescape_lenient(raw));
    Some(sanitize(&unescaped.replace("\r\n", "\n"))).filter(|text| !text.is_empty())
}

/// Single left-to-right unescape for strings with escapes JSON rejects.
///
/// Unknown escapes are kept verbatim.
fn unescape_lenient(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(escaped @ ('"' | '\\' | '/')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
