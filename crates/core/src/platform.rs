//! Job-board platform detection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Applicant-tracking system (or hosting site) a posting URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Comeet,
    Lever,
    Greenhouse,
    Linkedin,
    Generic,
}

/// Host markers checked in priority order.
const MARKERS: &[(&str, Platform)] = &[
    ("comeet.com", Platform::Comeet),
    ("lever.co", Platform::Lever),
    ("greenhouse.io", Platform::Greenhouse),
    ("linkedin.com", Platform::Linkedin),
];

impl Platform {
    /// Classify a URL by substring match on its lower-cased form.
    ///
    /// Total: anything unrecognised (including garbage input) is `Generic`.
    pub fn detect(url: &str) -> Self {
        let lowered = url.to_lowercase();
        MARKERS
            .iter()
            .find(|(marker, _)| lowered.contains(marker))
            .map(|(_, platform)| *platform)
            .unwrap_or(Platform::Generic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Comeet => "comeet",
            Platform::Lever => "lever",
            Platform::Greenhouse => "greenhouse",
            Platform::Linkedin => "linkedin",
            Platform::Generic => "generic",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
