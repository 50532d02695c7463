//! Reqwest-based HTTP gateway for badge platform APIs.
//!
//! The gateway is the only place that talks to the network. Pipeline stages
//! receive it as `&dyn HttpGateway`, so tests can substitute an in-memory
//! implementation.

use crate::config::CertmapConfig;
use crate::CertmapError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde_json::Value;
use std::io::Read;
use tracing::debug;

/// Maximum number of body characters echoed into error messages.
const BODY_EXCERPT_CHARS: usize = 200;

/// Largest response body the gateway will buffer. Badge documents are a few
/// kilobytes; anything past this is rejected before parsing.
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// GET capability used by the pipeline.
///
/// Implementations must be safe to share between concurrent `fetch_badge`
/// calls.
pub trait HttpGateway: Send + Sync {
    /// GET `uri` and parse the body as JSON.
    ///
    /// `uri` is either absolute (`http://`, `https://`) or relative to the
    /// gateway's base. Connection errors, timeouts and non-success statuses
    /// are `TransportFailure`; a body that is not JSON at all is
    /// `UnexpectedResponseShape`.
    fn get_json(&self, uri: &str) -> Result<Value, CertmapError>;
}

/// Blocking reqwest gateway with a fixed base URI.
///
/// Holds one connection-pooled client; construct it once and share it.
#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    client: Client,
    base: String,
}

impl ReqwestGateway {
    /// Create a gateway from config.
    ///
    /// Every request carries `Accept: application/json`, the configured
    /// User-Agent and the configured timeout.
    pub fn new(config: &CertmapConfig) -> Result<Self, CertmapError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&config.user_agent())
            .map_err(|e| CertmapError::ConfigError(format!("Invalid User-Agent: {}", e)))?;
        headers.insert(USER_AGENT, user_agent);

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| CertmapError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base: config.api_base.clone(),
        })
    }

    /// Get the configured base URI.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve a request URI against the base.
    ///
    /// Absolute URIs pass through untouched.
    pub fn resolve(&self, uri: &str) -> String {
        if is_absolute(uri) {
            uri.to_string()
        } else {
            format!("{}{}", self.base, uri.trim_start_matches('/'))
        }
    }
}

impl HttpGateway for ReqwestGateway {
    fn get_json(&self, uri: &str) -> Result<Value, CertmapError> {
        let url = self.resolve(uri);
        debug!(uri = %url, "GET");

        let transport = |message: String| CertmapError::TransportFailure {
            uri: url.clone(),
            message,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| transport(format!("Request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| transport(e.to_string()))?;

        let oversized = || CertmapError::UnexpectedResponseShape {
            uri: url.clone(),
            message: format!("body exceeds {} bytes", MAX_BODY_BYTES),
        };

        if response.content_length().is_some_and(|len| len > MAX_BODY_BYTES) {
            return Err(oversized());
        }

        let body = read_capped(response, MAX_BODY_BYTES)
            .map_err(|e| transport(format!("Failed to read body: {}", e)))?
            .ok_or_else(oversized)?;

        serde_json::from_slice(&body).map_err(|e| CertmapError::UnexpectedResponseShape {
            uri: url.clone(),
            message: format!(
                "{} (body: {:?})",
                e,
                excerpt(&String::from_utf8_lossy(&body))
            ),
        })
    }
}

/// Read at most `limit` bytes from `reader`.
///
/// Returns `None` when the stream holds more than `limit` bytes, without
/// buffering the excess.
fn read_capped<R: Read>(reader: R, limit: u64) -> std::io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    reader.take(limit + 1).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// Whether `uri` carries its own scheme.
fn is_absolute(uri: &str) -> bool {
    let lower = uri.get(..8).unwrap_or(uri).to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
