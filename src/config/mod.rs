//! Project configuration
//!
//! Database configuration and schema initialization.

pub mod database;

pub use database::*;
