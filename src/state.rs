//! Shared application state for all routes.

use sqlx::PgPool;

/// The database handle is the only process-wide state; it is constructed once
/// in `main` and injected here rather than held as a module-level singleton.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
