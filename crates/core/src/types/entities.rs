//! The `Customer`/`Product`/`Order` entities as the jobs consume them.
//!
//! These mirror the relational schema: integer primary keys, decimal
//! money columns, UTC timestamps. Orders belong to exactly one customer
//! and are cascade-deleted with it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::{CustomerId, OrderId, ProductId};

/// Products with stock strictly below this count are eligible for restocking.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// Flat amount added to a low-stock product's stock by the restock
/// mutation. Applied uniformly regardless of the deficit, so running the
/// mutation twice adds 20.
pub const RESTOCK_INCREMENT: i32 = 10;

/// A customer record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Primary key.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Contact email; the seed path treats it as a natural key.
    pub email: Email,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
}

/// A product record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Primary key.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units on hand. Expected non-negative, not enforced by the schema.
    pub stock: i32,
}

impl Product {
    /// Whether this product falls under the restocking threshold.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

/// An order placed by a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Primary key.
    pub id: OrderId,
    /// Owning customer.
    pub customer_id: CustomerId,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
    /// Order total.
    pub total_amount: Decimal,
}
