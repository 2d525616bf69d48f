//! `cleanup-customers` management command.
//!
//! Same work as `run-job cleanup`: kept as a named command because
//! operators call it by hand. Store errors propagate - a failed cleanup
//! must be visible in the exit status.

use std::error::Error;

use crm_jobs::jobs::cleanup;
use crm_jobs::{CrmConfig, db};

/// Delete inactive customers and print the count.
///
/// # Errors
///
/// Returns an error if configuration is missing or the store fails.
pub async fn run(config: &CrmConfig) -> Result<(), Box<dyn Error>> {
    let pool = db::create_pool(config.database_url()?).await?;
    let log = config.job_log(cleanup::LOG_FILE);

    let deleted = cleanup::run(&pool, &log).await?;
    println!("Successfully deleted {deleted} inactive customers");
    Ok(())
}
