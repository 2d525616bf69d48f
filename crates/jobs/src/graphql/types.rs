//! Client-facing views over the service's response data.

use chrono::{DateTime, Utc};
use crm_core::{Email, OrderId, Product};

/// Aggregate CRM statistics for the weekly report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrmStats {
    /// Total number of customers.
    pub total_customers: i64,
    /// Total number of orders.
    pub total_orders: i64,
    /// Sum of all order totals; 0.0 when there are no orders.
    pub total_revenue: f64,
}

/// A recent order resolved with its customer's email, ready for a
/// reminder line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReminder {
    /// The order to remind about.
    pub order_id: OrderId,
    /// Where the reminder would go.
    pub customer_email: Email,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
}

/// Result of the `updateLowStockProducts` mutation.
///
/// `success` is the service's own verdict; a `false` here arrives with a
/// 200 status and must be treated as a failed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockUpdate {
    /// Whether the service applied the batch.
    pub success: bool,
    /// Service-provided summary, e.g. `Updated 3 products`.
    pub message: String,
    /// Every product the mutation restocked, with new stock levels.
    pub updated_products: Vec<Product>,
}
