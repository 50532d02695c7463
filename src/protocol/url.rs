//! Badge identifier extraction from public badge URLs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Credly public badge URL grammar.
///
/// Matches `credly.com/badges/<36 hex-or-hyphen chars>` anywhere in the input,
/// so both `.../badges/<id>` and `.../badges/<id>/public_url` are accepted.
const CREDLY_BADGE_PATTERN: &str = r"(?i)credly\.com/badges/([a-f0-9\-]{36})";

static CREDLY_BADGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(CREDLY_BADGE_PATTERN).expect("CREDLY_BADGE_PATTERN is a valid regex")
});

/// Platform-issued badge identifier.
///
/// Holds exactly the substring matched in the URL; no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BadgeId(String);

impl BadgeId {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract a Credly badge identifier from a public badge URL.
///
/// Returns `None` when no identifier is present. Never panics.
pub fn parse_badge_id(url: &str) -> Option<BadgeId> {
    CREDLY_BADGE_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| BadgeId(m.as_str().to_string()))
}
