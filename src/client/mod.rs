//! HTTP transport and badge lookups.

pub mod fetch;
pub mod http;
