//! Vehicle repair shop backend
//!
//! Tracks vehicles, repairs in progress and a history of completed repairs
//! over a SQLite store. The binary wires these modules into an Axum server;
//! integration tests drive the same router directly.

pub mod config;
pub mod controllers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
