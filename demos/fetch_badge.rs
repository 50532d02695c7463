//! Fetch and verify a single badge.
//!
//! # Running
//!
//! ```bash
//! export BADGE_URL="https://www.credly.com/badges/<id>/public_url"
//! export BADGE_EMAIL="you@example.com"
//! export CERTMAP_PLATFORM="credly"   # optional
//! RUST_LOG=certmap=debug cargo run --example fetch_badge
//! ```
//!
//! A rejected badge prints nothing but a failure line; the reason (bad URL,
//! unknown badge, wrong email, platform unreachable) is only in the log.

use certmap::{build_client, CertmapConfig, Platform};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("certmap=info")),
        )
        .init();

    let url = std::env::var("BADGE_URL").expect("Set BADGE_URL environment variable");
    let email = std::env::var("BADGE_EMAIL").expect("Set BADGE_EMAIL environment variable");

    let platform: Platform = match std::env::var("CERTMAP_PLATFORM") {
        Ok(name) => match name.parse() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        },
        Err(_) => Platform::default(),
    };

    let mut config = CertmapConfig::credly("certmap-demo/0.1.0", "certmap-demo");
    config.platform = platform;

    let client = match build_client(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    match client.fetch_badge(&url, &email) {
        Some(record) => {
            if record.is_expired() {
                eprintln!("warning: badge has expired");
            }
            match record.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            eprintln!("Badge could not be verified for this email");
            std::process::exit(1);
        }
    }
}
