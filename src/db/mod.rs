use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;

use crate::config::{Config, Environment};

/// Establish a pooled connection to the database named by `DATABASE_URL`.
///
/// SQL statement logging is only switched on in development.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &Config) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(&config.database_url);
    opts.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(config.environment == Environment::Development);

    let db = Database::connect(opts).await?;
    tracing::debug!(backend = ?db.get_database_backend(), "Connection pool ready");
    Ok(db)
}

/// Round-trip a trivial query to check the pool can still reach the database.
pub async fn is_reachable(db: &DatabaseConnection) -> bool {
    match db.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database ping failed");
            false
        }
    }
}
