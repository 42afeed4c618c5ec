//! Shared application state for all routes.

use sqlx::PgPool;

/// Built once at startup and handed to every handler through `State`.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
