//! LinkedIn job views.

use super::patterns::{first_div_with_class, meta_description};
use super::sanitize::sanitize;

pub fn extract(html: &str) -> Option<String> {
    first_div_with_class(html, "description")
        .map(sanitize)
        .filter(|text| !text.is_empty())
        .or_else(|| meta_description(html).map(sanitize).filter(|text| !text.is_empty()))
}
