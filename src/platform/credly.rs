//! Credly client.
//!
//! Runs the badge pipeline against Credly's public Open Badges v2 API:
//! 1. Extract the badge id from the public URL
//! 2. Fetch the assertion (`badge_assertions/{id}`)
//! 3. Verify the claimed email against the recipient hash
//! 4. Fetch the badge class the assertion points at
//! 5. Assemble the canonical record
//!
//! Each stage needs the previous one's output, so they run strictly in order
//! and the first failure ends the call.

use crate::client::fetch::{try_fetch_assertion, try_fetch_badge_class};
use crate::client::http::HttpGateway;
use crate::crypto::verify::check_recipient;
use crate::platform::{BadgeClient, Platform};
use crate::protocol::url::parse_badge_id;
use crate::record::{assemble, BadgeRecord};
use crate::CertmapError;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Pipeline stage, reported in operator logs when a call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Badge URL parsing.
    Parse,
    /// Assertion lookup.
    FetchAssertion,
    /// Recipient verification.
    Verify,
    /// Badge-class lookup.
    FetchClass,
}

impl Stage {
    /// Log label for the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Parse => "parse",
            Stage::FetchAssertion => "fetch_assertion",
            Stage::Verify => "verify",
            Stage::FetchClass => "fetch_class",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed pipeline run: where it stopped and why.
#[derive(Debug)]
struct StageFailure {
    stage: Stage,
    error: CertmapError,
}

trait AtStage<T> {
    fn at(self, stage: Stage) -> Result<T, StageFailure>;
}

impl<T> AtStage<T> for Result<T, CertmapError> {
    fn at(self, stage: Stage) -> Result<T, StageFailure> {
        self.map_err(|error| StageFailure { stage, error })
    }
}

/// Badge client for Credly.
///
/// Cheap to share: the only state is the injected gateway. Calls block on
/// network I/O, so async callers should run them on a blocking thread.
#[derive(Clone)]
pub struct CredlyClient {
    gateway: Arc<dyn HttpGateway>,
}

impl CredlyClient {
    /// Create a client around an HTTP gateway whose base is the OBI v2 root.
    pub fn new(gateway: Arc<dyn HttpGateway>) -> Self {
        Self { gateway }
    }

    fn run(&self, url: &str, email: &str) -> Result<BadgeRecord, StageFailure> {
        let id = parse_badge_id(url)
            .ok_or_else(|| CertmapError::MalformedInput(format!("no Credly badge id in {:?}", url)))
            .at(Stage::Parse)?;

        let assertion = try_fetch_assertion(self.gateway.as_ref(), &id).at(Stage::FetchAssertion)?;

        check_recipient(&assertion, email).at(Stage::Verify)?;

        let badge_class = try_fetch_badge_class(self.gateway.as_ref(), &assertion.badge_class_ref)
            .at(Stage::FetchClass)?;

        Ok(assemble(assertion, badge_class, id))
    }
}

impl fmt::Debug for CredlyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredlyClient").finish_non_exhaustive()
    }
}

impl BadgeClient for CredlyClient {
    fn platform(&self) -> Platform {
        Platform::Credly
    }

    fn fetch_badge(&self, url: &str, email: &str) -> Option<BadgeRecord> {
        match self.run(url, email) {
            Ok(record) => {
                debug!(external_id = %record.external_id, "badge verified");
                Some(record)
            }
            Err(StageFailure { stage, error }) => {
                warn!(
                    platform = "credly",
                    stage = stage.as_str(),
                    kind = error.kind(),
                    error = %error,
                    "badge rejected"
                );
                None
            }
        }
    }
}
