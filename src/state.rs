//! Shared application state
//!
//! The state handed to every handler through the Axum router. The pool is
//! injected here instead of living in a process-wide global.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
