//! Open Badges v2 wire formats and badge URL grammar.

pub mod models;
pub mod url;
