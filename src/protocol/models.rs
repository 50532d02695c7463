//! Open Badges v2 response structs and their normalized forms.

use crate::CertmapError;
use serde::Deserialize;
use serde_json::Value;

/// Raw badge assertion (`GET badge_assertions/{id}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObiAssertion {
    pub issued_on: String,
    #[serde(default)]
    pub expires: Option<String>,
    pub recipient: ObiRecipient,
    pub badge: String,
}

/// Recipient block of an assertion.
#[derive(Debug, Clone, Deserialize)]
pub struct ObiRecipient {
    pub identity: String,
}

/// Raw badge class (`GET {assertion.badge}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ObiBadgeClass {
    pub name: String,
    pub issuer: ObiIssuer,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ObiImage>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Issuer profile embedded in a badge class.
#[derive(Debug, Clone, Deserialize)]
pub struct ObiIssuer {
    pub name: String,
}

/// Badge image, either an embedded image object or a bare IRI.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ObiImage {
    Object {
        #[serde(default)]
        id: Option<String>,
    },
    Iri(String),
}

impl ObiImage {
    fn into_reference(self) -> Option<String> {
        match self {
            ObiImage::Object { id } => id,
            ObiImage::Iri(iri) => Some(iri),
        }
    }
}

/// Issuance record for one badge instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeAssertion {
    /// Issue timestamp as sent by the platform (ISO 8601).
    pub issued_at: String,

    /// Expiry timestamp (ISO 8601); `None` means the badge never expires.
    pub expires_at: Option<String>,

    /// Algorithm-prefixed recipient hash, e.g. `sha256$<hex>`.
    pub recipient_identity: String,

    /// Absolute URI of the badge class.
    pub badge_class_ref: String,
}

impl From<ObiAssertion> for BadgeAssertion {
    fn from(raw: ObiAssertion) -> Self {
        Self {
            issued_at: raw.issued_on,
            expires_at: raw.expires,
            recipient_identity: raw.recipient.identity,
            badge_class_ref: raw.badge,
        }
    }
}

/// Credential template referenced by an assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeClass {
    pub name: String,
    pub issuer_name: String,
    pub description: Option<String>,
    pub image_ref: Option<String>,
    pub tags: Vec<String>,
}

impl From<ObiBadgeClass> for BadgeClass {
    fn from(raw: ObiBadgeClass) -> Self {
        Self {
            name: raw.name,
            issuer_name: raw.issuer.name,
            description: raw.description,
            image_ref: raw.image.and_then(ObiImage::into_reference),
            tags: raw.tags.unwrap_or_default(),
        }
    }
}

/// Parse a JSON body fetched from `uri` into an assertion.
pub fn parse_assertion(uri: &str, body: Value) -> Result<BadgeAssertion, CertmapError> {
    let raw: ObiAssertion = parse_object(uri, body, "badge assertion")?;
    Ok(raw.into())
}

/// Parse a JSON body fetched from `uri` into a badge class.
pub fn parse_badge_class(uri: &str, body: Value) -> Result<BadgeClass, CertmapError> {
    let raw: ObiBadgeClass = parse_object(uri, body, "badge class")?;
    Ok(raw.into())
}

fn parse_object<T: serde::de::DeserializeOwned>(
    uri: &str,
    body: Value,
    what: &str,
) -> Result<T, CertmapError> {
    if !body.is_object() {
        return Err(CertmapError::UnexpectedResponseShape {
            uri: uri.to_string(),
            message: format!("expected {} object, got {}", what, json_kind(&body)),
        });
    }
    serde_json::from_value(body).map_err(|e| CertmapError::UnexpectedResponseShape {
        uri: uri.to_string(),
        message: format!("invalid {}: {}", what, e),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
