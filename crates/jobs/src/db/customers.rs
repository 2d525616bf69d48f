//! Customer repository for direct store operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Repository for customer rows.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Delete every customer with no order on or after `cutoff`.
    ///
    /// Orders reference customers with `ON DELETE CASCADE`, so a deleted
    /// customer takes their (old) orders with them. Returns the number
    /// of customers removed.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the delete fails.
    pub async fn delete_inactive(&self, cutoff: DateTime<Utc>) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            DELETE FROM customers
            WHERE id NOT IN (
                SELECT DISTINCT customer_id
                FROM orders
                WHERE order_date >= $1
            )
            ",
        )
        .bind(cutoff)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Total number of customer rows.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(self.pool)
            .await
    }
}
