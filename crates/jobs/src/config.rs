//! Job runner configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CRM_GRAPHQL_URL` - Query/Mutation Service endpoint
//!   (default: `http://localhost:8000/graphql`)
//! - `CRM_LOG_DIR` - Directory for the per-job log files (default: `/tmp`)
//! - `CRM_DATABASE_URL` - `PostgreSQL` connection string; required only
//!   by the commands that touch the store directly (cleanup, seeding,
//!   migrations)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Default Query/Mutation Service endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:8000/graphql";

/// Default directory for the per-job log files.
pub const DEFAULT_LOG_DIR: &str = "/tmp";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),
}

/// Job runner configuration.
///
/// Implements `Debug` manually to redact the database URL, which
/// usually embeds a password.
#[derive(Clone)]
pub struct CrmConfig {
    /// Query/Mutation Service endpoint URL.
    pub graphql_url: String,
    /// Directory the job log files live in.
    pub log_dir: PathBuf,
    /// `PostgreSQL` connection string, if configured.
    pub database_url: Option<SecretString>,
}

impl CrmConfig {
    /// Load configuration from the environment, falling back to the
    /// documented defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let graphql_url =
            std::env::var("CRM_GRAPHQL_URL").unwrap_or_else(|_| DEFAULT_GRAPHQL_URL.to_owned());
        let log_dir = std::env::var("CRM_LOG_DIR")
            .map_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR), PathBuf::from);
        let database_url = std::env::var("CRM_DATABASE_URL").ok().map(SecretString::from);

        Self {
            graphql_url,
            log_dir,
            database_url,
        }
    }

    /// The database URL, for commands that talk to the store directly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `CRM_DATABASE_URL`
    /// was not set.
    pub fn database_url(&self) -> Result<&SecretString, ConfigError> {
        self.database_url
            .as_ref()
            .ok_or(ConfigError::MissingEnvVar("CRM_DATABASE_URL"))
    }

    /// A [`JobLog`](crate::joblog::JobLog) for `file_name` under the
    /// configured log directory.
    #[must_use]
    pub fn job_log(&self, file_name: &str) -> crate::joblog::JobLog {
        crate::joblog::JobLog::in_dir(&self.log_dir, file_name)
    }
}

impl std::fmt::Debug for CrmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrmConfig")
            .field("graphql_url", &self.graphql_url)
            .field("log_dir", &self.log_dir)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
