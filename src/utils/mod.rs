//! System utilities
//!
//! Error handling shared by every layer of the application.

pub mod errors;
