use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Number of connection attempts before giving up.
const CONNECT_ATTEMPTS: u32 = 10;

/// Pause between two connection attempts.
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Connects to the database, retrying until it answers a ping.
///
/// Opens a SeaORM connection pool using the connection string from configuration and
/// pings it. On failure the error is logged, the function sleeps for five seconds and
/// tries again, up to ten attempts. No migrations are run; the schema is owned by the
/// loader that fills it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected pool that answered a ping
/// - `Err(AppError::DatabaseUnavailable)` - Every attempt failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    connect_with_retry(config, CONNECT_ATTEMPTS, CONNECT_RETRY_DELAY).await
}

async fn connect_with_retry(
    config: &Config,
    attempts: u32,
    delay: Duration,
) -> Result<DatabaseConnection, AppError> {
    let mut attempt = 1;

    loop {
        match try_connect(config).await {
            Ok(db) => {
                tracing::info!("Connected to database on attempt {}", attempt);
                return Ok(db);
            }
            Err(source) if attempt >= attempts => {
                return Err(AppError::DatabaseUnavailable {
                    attempts: attempt,
                    source,
                });
            }
            Err(e) => {
                tracing::warn!(
                    "Database connection attempt {}/{} failed: {}; retrying in {}s",
                    attempt,
                    attempts,
                    e,
                    delay.as_secs()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

async fn try_connect(config: &Config) -> Result<DatabaseConnection, sea_orm::DbErr> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    db.ping().await?;

    Ok(db)
}
