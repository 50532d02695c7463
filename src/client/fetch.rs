//! Assertion and badge-class lookups.
//!
//! Each lookup comes in two flavors: `try_*` returns the failure reason for
//! callers that log it themselves, and the plain form logs the reason and
//! returns `None`. Neither ever panics.

use crate::client::http::HttpGateway;
use crate::protocol::models::{parse_assertion, parse_badge_class, BadgeAssertion, BadgeClass};
use crate::protocol::url::BadgeId;
use crate::CertmapError;
use tracing::{debug, warn};

/// Base-relative path of an assertion.
pub fn assertion_path(id: &BadgeId) -> String {
    format!("badge_assertions/{}", id)
}

/// Fetch the assertion for `id`.
pub fn try_fetch_assertion(
    gateway: &dyn HttpGateway,
    id: &BadgeId,
) -> Result<BadgeAssertion, CertmapError> {
    let uri = assertion_path(id);
    debug!(uri = %uri, "fetching badge assertion");
    let body = gateway.get_json(&uri)?;
    parse_assertion(&uri, body)
}

/// Fetch the assertion for `id`, logging and discarding any failure.
pub fn fetch_assertion(gateway: &dyn HttpGateway, id: &BadgeId) -> Option<BadgeAssertion> {
    try_fetch_assertion(gateway, id)
        .map_err(|e| {
            warn!(badge_id = %id, kind = e.kind(), error = %e, "badge assertion unavailable");
        })
        .ok()
}

/// Fetch the badge class at `reference`.
///
/// `reference` comes from the assertion and is normally absolute; it is
/// requested as-is.
pub fn try_fetch_badge_class(
    gateway: &dyn HttpGateway,
    reference: &str,
) -> Result<BadgeClass, CertmapError> {
    debug!(uri = %reference, "fetching badge class");
    let body = gateway.get_json(reference)?;
    parse_badge_class(reference, body)
}

/// Fetch the badge class at `reference`, logging and discarding any failure.
pub fn fetch_badge_class(gateway: &dyn HttpGateway, reference: &str) -> Option<BadgeClass> {
    try_fetch_badge_class(gateway, reference)
        .map_err(|e| {
            warn!(uri = %reference, kind = e.kind(), error = %e, "badge class unavailable");
        })
        .ok()
}
