//! Direct `PostgreSQL` access for the commands that bypass the
//! Query/Mutation Service: customer cleanup, sample-data seeding, and
//! migrations.
//!
//! # Tables
//!
//! - `customers` - identity, name, unique email, creation time
//! - `products` - name, decimal price, stock count
//! - `orders` - owning customer (cascade delete), date, decimal total
//!
//! Migrations live in `crates/jobs/migrations/` and run via:
//! ```bash
//! cargo run -p crm-cli -- migrate
//! ```
//!
//! Queries use the runtime-bound sqlx API rather than the compile-time
//! checked macros, so builds do not need a database.

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

mod customers;
pub mod seed;

pub use customers::CustomerRepository;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
