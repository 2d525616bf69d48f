//! Order reminders job: one log line per order placed in the trailing
//! 7 days, resolved with the customer's email.
//!
//! Unlike the heartbeat, failures here are surfaced to the caller after
//! being logged; a missed reminder batch is worth a noisy exit.

use std::io;

use thiserror::Error;
use tracing::info;

use crate::graphql::{CrmClient, CrmError};
use crate::joblog::{JobLog, event_timestamp};

/// Default log file name under the configured log directory.
pub const LOG_FILE: &str = "order_reminders_log.txt";

/// Failure modes of a reminders run.
#[derive(Debug, Error)]
pub enum ReminderError {
    /// Appending to the log failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The service call failed; an error line was written first.
    #[error(transparent)]
    Crm(#[from] CrmError),
}

/// Run the reminders job. Returns the number of reminder lines written.
///
/// An empty week is not an error: zero orders means zero lines and a
/// successful run.
///
/// # Errors
///
/// Returns [`ReminderError::Crm`] when the service call fails (after
/// writing an error line) and [`ReminderError::Io`] when the log cannot
/// be written.
pub async fn run(client: &CrmClient, log: &JobLog) -> Result<usize, ReminderError> {
    let ts = event_timestamp();

    match client.orders_last_week().await {
        Ok(reminders) => {
            for reminder in &reminders {
                log.append(&format!(
                    "{ts} - Order reminder: Order ID {}, Customer: {}",
                    reminder.order_id, reminder.customer_email
                ))?;
            }
            info!(count = reminders.len(), "order reminders processed");
            Ok(reminders.len())
        }
        Err(e) => {
            log.append(&format!("{ts} - Error processing order reminders: {e}"))?;
            Err(e.into())
        }
    }
}
