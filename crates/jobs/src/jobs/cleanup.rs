//! Customer cleanup job: delete customers with no order in the trailing
//! 365 days.
//!
//! This is the one job that talks to the store in-process instead of
//! going through the Query/Mutation Service. Orders have no independent
//! existence, so deleting a customer cascades to their orders. Store
//! errors propagate; cleanup is deliberately loud when the store is down.

use std::io;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::db::CustomerRepository;
use crate::joblog::{JobLog, event_timestamp};

/// Default log file name under the configured log directory.
pub const LOG_FILE: &str = "customer_cleanup_log.txt";

/// A customer is inactive once their newest order is older than this.
pub const INACTIVE_AFTER_DAYS: i64 = 365;

/// Failure modes of a cleanup run.
#[derive(Debug, Error)]
pub enum CleanupError {
    /// The store rejected or failed the delete.
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    /// Appending to the log failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Run the cleanup. Returns the number of customers deleted.
///
/// Deterministic for a given set of order timestamps, and idempotent at
/// the fixed point: a rerun with no new orders deletes zero.
///
/// # Errors
///
/// Propagates store errors and log append errors.
pub async fn run(pool: &PgPool, log: &JobLog) -> Result<u64, CleanupError> {
    let cutoff = Utc::now() - Duration::days(INACTIVE_AFTER_DAYS);
    let deleted = CustomerRepository::new(pool).delete_inactive(cutoff).await?;

    log.append(&format!(
        "{} - Deleted {deleted} inactive customers",
        event_timestamp()
    ))?;
    info!(deleted, "inactive customers removed");
    Ok(deleted)
}
