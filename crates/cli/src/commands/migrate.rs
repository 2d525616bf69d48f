//! Database migration command.
//!
//! Migrations live in `crates/jobs/migrations/` and are embedded into
//! the binary at compile time.

use crm_jobs::{CrmConfig, config::ConfigError, db};

/// Errors that can occur while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run pending database migrations.
///
/// # Errors
///
/// Returns an error if `CRM_DATABASE_URL` is unset, the connection
/// fails, or a migration fails to apply.
pub async fn run(config: &CrmConfig) -> Result<(), MigrationError> {
    tracing::info!("Connecting to CRM database...");
    let pool = db::create_pool(config.database_url()?).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../jobs/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
