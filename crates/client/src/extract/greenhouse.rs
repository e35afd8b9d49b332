//! Greenhouse job boards.

use super::patterns::div_with_id;
use super::sanitize::sanitize;

const CONTAINER_IDS: [&str; 2] = ["content", "app_body"];

/// Sanitize `#content`, or `#app_body` when there is no usable `#content`.
pub fn extract(html: &str) -> Option<String> {
    CONTAINER_IDS
        .iter()
        .filter_map(|id| div_with_id(html, id))
        .map(sanitize)
        .find(|text| !text.is_empty())
}
