//! `create-sample-data` management command.

use std::error::Error;

use crm_jobs::db::{self, seed};
use crm_jobs::CrmConfig;

/// Populate the store with sample data and print a summary.
///
/// # Errors
///
/// Returns an error if configuration is missing or any insert fails.
pub async fn run(config: &CrmConfig) -> Result<(), Box<dyn Error>> {
    let pool = db::create_pool(config.database_url()?).await?;

    let summary = seed::create_sample_data(&pool).await?;
    println!(
        "Created {} customers, {} products, {} orders",
        summary.customers_created, summary.products_created, summary.orders_created
    );
    println!("Successfully created sample data");
    Ok(())
}
