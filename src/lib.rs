//! # Certmap
//!
//! **Fetch, verify and normalize publicly issued digital badges.**
//!
//! Certmap takes a public badge URL and the email a user claims the badge was
//! issued to, looks the badge up on the certification platform, checks the
//! email against the platform's recipient hash, and returns a canonical
//! [`BadgeRecord`] ready for a catalog.
//!
//! ## Features
//!
//! - **Platform-agnostic API** — callers use the [`BadgeClient`] trait; the
//!   platform is picked by configuration
//! - **Constant-time identity check** — SHA-256 recipient hashes are compared
//!   without leaking where a mismatch occurs
//! - **All-or-nothing results** — any failed stage yields `None`, never a
//!   partial record
//! - **Oracle resistance** — bad URL, missing badge, wrong email and
//!   unreachable platform look identical to the caller; operators get the
//!   real reason in the logs
//!
//! ## Quickstart
//!
//! ```no_run
//! use certmap::{build_client, CertmapConfig};
//!
//! fn main() -> Result<(), certmap::CertmapError> {
//!     let config = CertmapConfig::credly("myapp/1.0.0", "myapp-catalog");
//!     let client = build_client(&config)?;
//!
//!     let url = "https://www.credly.com/badges/3fae1210-0000-4000-8000-000000000000/public_url";
//!     match client.fetch_badge(url, "alice@example.com") {
//!         Some(record) => println!("{} issued by {}", record.name, record.issuer),
//!         None => println!("badge could not be verified"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Threat Model
//!
//! Certmap proves that the claimed email hashes to the recipient identity the
//! platform publishes. It does **not** prove the caller owns that email:
//! anyone who knows the recipient's address passes verification. The public
//! Open Badges API offers no stronger check without authenticating against
//! the platform.
//!
//! ## Configuration
//!
//! - `platform` — which certification platform to talk to
//! - `api_base` — versioned API root (defaults to Credly's OBI v2 endpoint)
//! - `timeout` — applied to every network call; a timeout is a failed stage
//!
//! See [`CertmapConfig`] for full documentation.

#![warn(missing_docs)]

// Core modules
pub mod config;
pub mod errors;

// Crypto layer
pub mod crypto;

// Protocol layer
pub mod protocol;

// Client layer
pub mod client;

// Output
pub mod record;

// Platforms (main public API)
pub mod platform;

// Re-exports for public API
pub use client::http::{HttpGateway, ReqwestGateway};
pub use config::CertmapConfig;
pub use errors::CertmapError;
pub use platform::credly::CredlyClient;
pub use platform::{build_client, BadgeClient, Platform};
pub use protocol::url::{parse_badge_id, BadgeId};
pub use record::BadgeRecord;
