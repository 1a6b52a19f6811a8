//! Database connection management

use sqlx::PgPool;
use tracing::debug;

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    debug!("connecting to PostgreSQL");

    PgPool::connect(database_url).await
}
