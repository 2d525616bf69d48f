//! Low-stock update job: ask the service to restock every product under
//! the threshold and record what changed.
//!
//! The restock amount is a flat +10 per product, applied by the service
//! regardless of how far under the threshold a product sits. Running the
//! job twice restocks twice; that is the contract, not a bug.

use std::io;

use tracing::{info, warn};

use crm_core::Product;

use crate::graphql::CrmClient;
use crate::joblog::{JobLog, event_timestamp};

/// Default log file name under the configured log directory.
pub const LOG_FILE: &str = "low_stock_updates_log.txt";

/// How a low-stock run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LowStockOutcome {
    /// The service restocked these products.
    Updated(Vec<Product>),
    /// Nothing was under the threshold.
    NoneFound,
    /// The mutation was rejected or the call failed; the reason was
    /// appended to the log.
    Failed(String),
}

/// Run the low-stock update.
///
/// Service and transport failures are converted into log lines and a
/// [`LowStockOutcome::Failed`]; they never propagate past the job.
///
/// # Errors
///
/// Returns an error only if appending to the log fails.
pub async fn run(client: &CrmClient, log: &JobLog) -> io::Result<LowStockOutcome> {
    let ts = event_timestamp();

    match client.update_low_stock().await {
        Ok(update) if update.success => {
            log.append(&format!("{ts} - Low stock update executed"))?;
            for product in &update.updated_products {
                log.append(&format!(
                    "{ts} - Updated product: {}, new stock: {}",
                    product.name, product.stock
                ))?;
            }
            if update.updated_products.is_empty() {
                log.append(&format!("{ts} - No low stock products found to update"))?;
                info!("low stock update executed, nothing to restock");
                Ok(LowStockOutcome::NoneFound)
            } else {
                info!(
                    count = update.updated_products.len(),
                    "low stock update executed"
                );
                Ok(LowStockOutcome::Updated(update.updated_products))
            }
        }
        Ok(update) => {
            log.append(&format!("{ts} - Mutation failed: {}", update.message))?;
            warn!(message = %update.message, "low stock mutation rejected");
            Ok(LowStockOutcome::Failed(update.message))
        }
        Err(e) => {
            log.append(&format!("{ts} - Error updating low stock: {e}"))?;
            warn!(error = %e, "low stock update failed");
            Ok(LowStockOutcome::Failed(e.to_string()))
        }
    }
}
