//! Scheduler adapter: run one job to completion and map its outcome to
//! an exit status.
//!
//! The per-job propagation policy lives here, not in the jobs:
//!
//! - `heartbeat`, `low-stock`, `weekly-report` - service failures were
//!   already logged by the job; the process still exits 0.
//! - `order-reminders` - failures are printed to stderr, exit stays 0 so
//!   the scheduler's next tick is the retry.
//! - `cleanup` - store failures are fatal (non-zero exit).

use std::error::Error;

use clap::ValueEnum;

use crm_jobs::jobs::{cleanup, heartbeat, low_stock, reminders, report};
use crm_jobs::{CrmClient, CrmConfig, db};

/// The five schedulable jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JobName {
    /// Heartbeat log plus best-effort endpoint health probe
    Heartbeat,
    /// Restock products under the low-stock threshold
    LowStock,
    /// Reminder lines for orders placed in the last 7 days
    OrderReminders,
    /// Aggregate customer/order/revenue report
    WeeklyReport,
    /// Delete customers with no orders in the last year
    Cleanup,
}

/// Run the named job once.
///
/// # Errors
///
/// Returns an error for store failures during `cleanup`, missing
/// configuration, and log I/O failures.
pub async fn job(name: JobName, config: &CrmConfig) -> Result<(), Box<dyn Error>> {
    match name {
        JobName::Heartbeat => {
            let client = CrmClient::new(config.graphql_url.clone());
            let log = config.job_log(heartbeat::LOG_FILE);
            // Probe status is already in the log; a dead endpoint does
            // not fail the heartbeat.
            heartbeat::run(&client, &log).await?;
        }
        JobName::LowStock => {
            let client = CrmClient::new(config.graphql_url.clone());
            let log = config.job_log(low_stock::LOG_FILE);
            low_stock::run(&client, &log).await?;
        }
        JobName::OrderReminders => {
            let client = CrmClient::new(config.graphql_url.clone());
            let log = config.job_log(reminders::LOG_FILE);
            match reminders::run(&client, &log).await {
                Ok(_) => println!("Order reminders processed!"),
                Err(reminders::ReminderError::Io(e)) => return Err(e.into()),
                Err(e) => eprintln!("Error: {e}"),
            }
        }
        JobName::WeeklyReport => {
            let client = CrmClient::new(config.graphql_url.clone());
            let log = config.job_log(report::LOG_FILE);
            let outcome = report::run(&client, &log).await?;
            println!("{outcome}");
        }
        JobName::Cleanup => {
            let pool = db::create_pool(config.database_url()?).await?;
            let log = config.job_log(cleanup::LOG_FILE);
            let deleted = cleanup::run(&pool, &log).await?;
            println!("Successfully deleted {deleted} inactive customers");
        }
    }
    Ok(())
}
