//! Certmap configuration.

use crate::platform::Platform;
use crate::CertmapError;
use std::time::Duration;

/// Versioned root of Credly's public Open Badges v2 API.
pub const CREDLY_API_BASE: &str = "https://api.credly.com/v1/obi/v2/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for badge fetching.
///
/// Hosts typically build one of these at startup, call [`CertmapConfig::validate`]
/// and then hand it to [`build_client`](crate::build_client).
#[derive(Debug, Clone)]
pub struct CertmapConfig {
    /// Certification platform the client talks to.
    pub platform: Platform,

    /// Host application name and version (e.g., "glpi/11.0.0").
    pub app_name: String,

    /// User-Agent product identifier (e.g., "certmap-plugin").
    pub user_agent_product: String,

    /// Versioned API root. Relative request paths are joined onto it,
    /// so it must end with `/`.
    pub api_base: String,

    /// Timeout applied to every network call.
    pub timeout: Duration,
}

impl CertmapConfig {
    /// Configuration for the Credly platform with default base and timeout.
    pub fn credly(app_name: impl Into<String>, user_agent_product: impl Into<String>) -> Self {
        Self {
            platform: Platform::Credly,
            app_name: app_name.into(),
            user_agent_product: user_agent_product.into(),
            api_base: CREDLY_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API root (for staging hosts or mock servers).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), CertmapError> {
        if self.app_name.is_empty() {
            return Err(CertmapError::ConfigError(
                "app_name cannot be empty".to_string(),
            ));
        }
        if self.user_agent_product.is_empty() {
            return Err(CertmapError::ConfigError(
                "user_agent_product cannot be empty".to_string(),
            ));
        }
        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            return Err(CertmapError::ConfigError(format!(
                "api_base must be an absolute http(s) URL, got {}",
                self.api_base
            )));
        }
        if !self.api_base.ends_with('/') {
            return Err(CertmapError::ConfigError(format!(
                "api_base must end with '/', got {}",
                self.api_base
            )));
        }
        if self.timeout.is_zero() {
            return Err(CertmapError::ConfigError(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the User-Agent header value.
    ///
    /// Format: `<product>/certmap-<version> <app>`
    /// Example: `certmap-plugin/certmap-0.1.0 glpi/11.0.0`
    pub fn user_agent(&self) -> String {
        format!(
            "{}/certmap-{} {}",
            self.user_agent_product,
            env!("CARGO_PKG_VERSION"),
            self.app_name
        )
    }
}
