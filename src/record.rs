//! Canonical badge record handed to the downstream catalog.

use crate::protocol::models::{BadgeAssertion, BadgeClass};
use crate::protocol::url::BadgeId;
use crate::CertmapError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Normalized, platform-independent badge record.
///
/// Field names and nullability are the compatibility contract with catalog
/// consumers: optional fields serialize as `null`, `tags` as `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRecord {
    /// Certification name.
    pub name: String,

    /// Issuing organization.
    pub issuer: String,

    /// Identifier on the originating platform.
    pub external_id: String,

    /// Issue date (ISO 8601, as sent by the platform).
    pub issued_at: String,

    /// Certification description.
    pub description: Option<String>,

    /// Badge image reference.
    pub image_url: Option<String>,

    /// Associated competencies.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Expiry date (ISO 8601); `None` if the badge does not expire.
    pub expires_at: Option<String>,
}

impl BadgeRecord {
    /// Serialize the record to JSON.
    pub fn to_json(&self) -> Result<String, CertmapError> {
        serde_json::to_string(self)
            .map_err(|e| CertmapError::Serialization(format!("Failed to serialize record: {}", e)))
    }

    /// Issue date as UTC, if it parses.
    pub fn issued_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.issued_at)
    }

    /// Expiry date as UTC, if present and parseable.
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at.as_deref().and_then(parse_timestamp)
    }

    /// Whether the badge had expired at `now`.
    ///
    /// A missing or unparseable expiry never counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at_utc()
            .map(|expires| expires <= now)
            .unwrap_or(false)
    }

    /// Whether the badge has expired as of the current wall time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Combine a verified assertion and its badge class into a record.
pub fn assemble(assertion: BadgeAssertion, badge_class: BadgeClass, id: BadgeId) -> BadgeRecord {
    BadgeRecord {
        name: badge_class.name,
        issuer: badge_class.issuer_name,
        external_id: id.into_string(),
        issued_at: assertion.issued_at,
        description: badge_class.description,
        image_url: badge_class.image_ref,
        tags: badge_class.tags,
        expires_at: assertion.expires_at,
    }
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date at midnight UTC.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
