//! Sample-data generation for exercising the jobs end to end.
//!
//! Customers are upserted by email and products by name, so reseeding an
//! existing database creates nothing new there. Orders are spread across
//! three age buckets so every job has something to chew on: recent ones
//! for reminders, and year-old ones so cleanup has victims.

use chrono::{Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crm_core::CustomerId;

const SAMPLE_CUSTOMERS: &[(&str, &str)] = &[
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
    ("Bob Wilson", "bob@example.com"),
    ("Alice Brown", "alice@example.com"),
    ("Charlie Davis", "charlie@example.com"),
];

// (name, price cents, stock) - a mix of low-stock and healthy products
const SAMPLE_PRODUCTS: &[(&str, i64, i32)] = &[
    ("Laptop", 99999, 5),
    ("Mouse", 2599, 15),
    ("Keyboard", 7999, 8),
    ("Monitor", 29999, 3),
    ("Webcam", 8999, 12),
];

const SAMPLE_ORDER_COUNT: usize = 10;

/// What the seeding run created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// New customer rows (existing emails are skipped).
    pub customers_created: u64,
    /// New product rows (existing names are skipped).
    pub products_created: u64,
    /// Order rows inserted.
    pub orders_created: u64,
}

/// Populate the store with sample customers, products, and orders.
///
/// # Errors
///
/// Returns `sqlx::Error` if any insert fails.
pub async fn create_sample_data(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    let mut summary = SeedSummary::default();

    let mut customer_ids: Vec<CustomerId> = Vec::with_capacity(SAMPLE_CUSTOMERS.len());
    for (name, email) in SAMPLE_CUSTOMERS {
        let inserted = sqlx::query(
            r"
            INSERT INTO customers (name, email)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            ",
        )
        .bind(name)
        .bind(email)
        .execute(pool)
        .await?
        .rows_affected();

        if inserted > 0 {
            info!(name, "created customer");
        }
        summary.customers_created += inserted;

        let id: CustomerId = sqlx::query_scalar("SELECT id FROM customers WHERE email = $1")
            .bind(email)
            .fetch_one(pool)
            .await?;
        customer_ids.push(id);
    }

    for (name, price_cents, stock) in SAMPLE_PRODUCTS {
        let inserted = sqlx::query(
            r"
            INSERT INTO products (name, price, stock)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            ",
        )
        .bind(name)
        .bind(Decimal::new(*price_cents, 2))
        .bind(stock)
        .execute(pool)
        .await?
        .rows_affected();

        if inserted > 0 {
            info!(name, "created product");
        }
        summary.products_created += inserted;
    }

    let mut rng = rand::rng();
    for i in 0..SAMPLE_ORDER_COUNT {
        let customer_id = customer_ids[rng.random_range(0..customer_ids.len())];

        // Recent (last week), older (last month), and stale (>1 year)
        let age_days = if i < 3 {
            rng.random_range(1..=7)
        } else if i < 6 {
            rng.random_range(8..=30)
        } else {
            rng.random_range(365..=500)
        };
        let order_date = Utc::now() - Duration::days(age_days);
        let total_amount = Decimal::new(rng.random_range(5_000..50_000), 2);

        sqlx::query(
            r"
            INSERT INTO orders (customer_id, order_date, total_amount)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(customer_id)
        .bind(order_date)
        .bind(total_amount)
        .execute(pool)
        .await?;
        summary.orders_created += 1;
    }

    info!(
        customers = summary.customers_created,
        products = summary.products_created,
        orders = summary.orders_created,
        "sample data created"
    );
    Ok(summary)
}
