//! Weekly report job: aggregate customer, order, and revenue totals.
//!
//! Designed for a weekly cadence (e.g. Monday morning) on the external
//! scheduler. Unlike the other jobs it produces a human-readable result
//! value; failures become a failed outcome string, never a raised error.

use std::fmt;
use std::io;

use tracing::{info, warn};

use crate::graphql::CrmClient;
use crate::joblog::{JobLog, event_timestamp};

/// Default log file name under the configured log directory.
pub const LOG_FILE: &str = "crm_report_log.txt";

/// Result value of a report run.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// The report was generated and logged.
    Generated {
        /// Total customer count.
        customers: i64,
        /// Total order count.
        orders: i64,
        /// Sum of all order totals; 0.0 with no orders.
        revenue: f64,
    },
    /// The service call failed; the message was appended to the log.
    Failed(String),
}

impl fmt::Display for ReportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated {
                customers,
                orders,
                revenue,
            } => write!(
                f,
                "Report generated: {customers} customers, {orders} orders, {revenue} revenue"
            ),
            Self::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

/// Run the weekly report.
///
/// # Errors
///
/// Returns an error only if appending to the log fails.
pub async fn run(client: &CrmClient, log: &JobLog) -> io::Result<ReportOutcome> {
    let ts = event_timestamp();

    match client.stats().await {
        Ok(stats) => {
            log.append(&format!(
                "{ts} - Report: {} customers, {} orders, {} revenue",
                stats.total_customers, stats.total_orders, stats.total_revenue
            ))?;
            info!(
                customers = stats.total_customers,
                orders = stats.total_orders,
                revenue = stats.total_revenue,
                "weekly report generated"
            );
            Ok(ReportOutcome::Generated {
                customers: stats.total_customers,
                orders: stats.total_orders,
                revenue: stats.total_revenue,
            })
        }
        Err(e) => {
            let msg = format!("Error generating CRM report: {e}");
            log.append(&format!("{ts} - Error: {msg}"))?;
            warn!(error = %e, "weekly report failed");
            Ok(ReportOutcome::Failed(msg))
        }
    }
}
