//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{PostRepository, UserRepository};
use scribe_infra::{DatabaseConfig, DbConn, DbErr, PgPostRepository, PgUserRepository};

/// Shared application state.
///
/// Constructed once at startup and holds only immutable pieces: the
/// repository handles over the connection pool.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Connect to the database and build the repositories.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = scribe_infra::connect(config).await?;
        Ok(Self::with_connection(db))
    }

    /// Build the state over an existing connection. Used by tests.
    pub fn with_connection(db: DbConn) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(db.clone())),
            posts: Arc::new(PgPostRepository::new(db)),
        }
    }
}
