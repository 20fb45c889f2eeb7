//! Connection pool lifecycle
//!
//! The pool is built once at startup and handed to [`Repository::new`]; every
//! store operation checks a connection out for the duration of one statement.
//!
//! [`Repository::new`]: crate::repository::Repository::new

use sqlx::{
    migrate::MigrateError,
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

use crate::config::DatabaseConfig;

/// Open the connection pool described by `config`
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let mut options: PgConnectOptions = config.url.parse()?;
    if let Some(username) = &config.username {
        options = options.username(username);
    }
    if let Some(password) = &config.password {
        options = options.password(password);
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Connected to database"
    );
    Ok(pool)
}

/// Apply the embedded schema migrations
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}

/// Wait for checked-out connections to return, then close the pool
pub async fn close(pool: PgPool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}
