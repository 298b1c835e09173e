//! Data models
//!
//! Entities mapping to the SQLite schema plus the request payloads
//! parsed from form submissions.

pub mod repair;
pub mod vehicle;
