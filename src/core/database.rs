use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Create the Postgres pool shared by the catalog services.
///
/// Sizing and timeouts come from `DatabaseConfig`, so they stay tunable
/// per deployment without a rebuild.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await?;

    tracing::debug!(
        "Catalog pool connected: max_connections={}, min_connections={}",
        config.max_connections,
        config.min_connections
    );

    Ok(pool)
}
