//! Heartbeat job: prove the job runner itself is alive, then probe the
//! Query/Mutation Service as a best-effort extra.

use std::io;

use tracing::{info, warn};

use crate::graphql::CrmClient;
use crate::joblog::{JobLog, heartbeat_timestamp};

/// Default log file name under the configured log directory.
pub const LOG_FILE: &str = "crm_heartbeat_log.txt";

/// What the optional health probe found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The service answered the `hello` query.
    Responsive,
    /// The probe failed; the reason was appended to the log.
    Failed(String),
}

/// Run the heartbeat.
///
/// Always appends the `CRM is alive` line first. The health probe is
/// failure-isolated: its result is appended as a second line and
/// reported in the return value, but a dead endpoint never fails the
/// heartbeat itself.
///
/// # Errors
///
/// Returns an error only if appending to the log fails.
pub async fn run(client: &CrmClient, log: &JobLog) -> io::Result<ProbeStatus> {
    let ts = heartbeat_timestamp();
    log.append(&format!("{ts} CRM is alive"))?;

    match client.hello().await {
        Ok(_) => {
            log.append(&format!("{ts} GraphQL endpoint responsive"))?;
            info!("heartbeat recorded, endpoint responsive");
            Ok(ProbeStatus::Responsive)
        }
        Err(e) => {
            let reason = e.to_string();
            log.append(&format!("{ts} GraphQL endpoint check failed: {reason}"))?;
            warn!(error = %reason, "heartbeat recorded, endpoint probe failed");
            Ok(ProbeStatus::Failed(reason))
        }
    }
}
