//! Certification platforms.
//!
//! Every platform implements [`BadgeClient`]. Hosts pick one through
//! [`CertmapConfig::platform`] and never depend on a concrete client type,
//! so adding a platform does not touch callers.

pub mod credly;

use crate::client::http::{HttpGateway, ReqwestGateway};
use crate::config::CertmapConfig;
use crate::record::BadgeRecord;
use crate::CertmapError;
use credly::CredlyClient;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Fetch-and-verify capability offered by a certification platform.
pub trait BadgeClient: Send + Sync {
    /// Platform this client talks to.
    fn platform(&self) -> Platform;

    /// Fetch the badge behind `url` and verify it was issued to `email`.
    ///
    /// Returns `None` if the URL is not a badge URL, the badge cannot be
    /// fetched, or `email` is not the recipient. The reasons are logged but
    /// deliberately indistinguishable to the caller.
    ///
    /// Verification only shows that `email` hashes to the recipient identity
    /// the platform publishes; it does not authenticate the caller as the
    /// owner of that address.
    fn fetch_badge(&self, url: &str, email: &str) -> Option<BadgeRecord>;
}

/// Supported certification platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    /// Credly, via its public Open Badges v2 API.
    #[default]
    Credly,
}

impl Platform {
    /// Configuration name of the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Credly => "credly",
        }
    }

    /// Build this platform's client around an existing gateway.
    pub fn with_gateway(&self, gateway: Arc<dyn HttpGateway>) -> Box<dyn BadgeClient> {
        match self {
            Platform::Credly => Box::new(CredlyClient::new(gateway)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CertmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credly" => Ok(Platform::Credly),
            other => Err(CertmapError::ConfigError(format!(
                "unknown badge platform: {}",
                other
            ))),
        }
    }
}

/// Build the client selected by `config`, with its own HTTP gateway.
///
/// # Errors
/// Returns `ConfigError` if the configuration is invalid or the HTTP client
/// cannot be built.
pub fn build_client(config: &CertmapConfig) -> Result<Box<dyn BadgeClient>, CertmapError> {
    config.validate()?;
    let gateway: Arc<dyn HttpGateway> = Arc::new(ReqwestGateway::new(config)?);
    Ok(config.platform.with_gateway(gateway))
}
