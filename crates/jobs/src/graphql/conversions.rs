//! Conversions from generated GraphQL response types into domain types.
//!
//! The service serializes IDs, decimals, and datetimes as strings; any
//! value that does not parse is a [`CrmError::DataShape`], not a panic.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use crm_core::{Customer, CustomerId, Email, Order, OrderId, Product, ProductId};

use super::CrmError;
use super::queries::{get_customers, get_orders, get_products, low_stock_products,
    orders_last_week, update_low_stock_products};
use super::types::OrderReminder;

fn parse_id(raw: &str, what: &str) -> Result<i32, CrmError> {
    raw.parse()
        .map_err(|_| CrmError::DataShape(format!("{what} id {raw:?} is not an integer")))
}

fn parse_decimal(raw: &str, what: &str) -> Result<Decimal, CrmError> {
    raw.parse()
        .map_err(|_| CrmError::DataShape(format!("{what} {raw:?} is not a decimal")))
}

fn parse_datetime(raw: &str, what: &str) -> Result<DateTime<Utc>, CrmError> {
    // RFC 3339 with offset is the norm; a bare naive datetime is taken as UTC.
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        })
        .map_err(|_| CrmError::DataShape(format!("{what} {raw:?} is not a datetime")))
}

fn parse_email(raw: &str) -> Result<Email, CrmError> {
    Email::parse(raw).map_err(|e| CrmError::DataShape(format!("customer email {raw:?}: {e}")))
}

fn parse_stock(raw: i64) -> Result<i32, CrmError> {
    i32::try_from(raw)
        .map_err(|_| CrmError::DataShape(format!("stock count {raw} out of range")))
}

pub fn convert_customer(c: get_customers::GetCustomersCustomers) -> Result<Customer, CrmError> {
    Ok(Customer {
        id: CustomerId::new(parse_id(&c.id, "customer")?),
        name: c.name,
        email: parse_email(&c.email)?,
        created_at: parse_datetime(&c.created_at, "customer createdAt")?,
    })
}

pub fn convert_product(p: get_products::GetProductsProducts) -> Result<Product, CrmError> {
    Ok(Product {
        id: ProductId::new(parse_id(&p.id, "product")?),
        name: p.name,
        price: parse_decimal(&p.price, "product price")?,
        stock: parse_stock(p.stock)?,
    })
}

pub fn convert_low_stock_product(
    p: low_stock_products::LowStockProductsLowStockProducts,
) -> Result<Product, CrmError> {
    Ok(Product {
        id: ProductId::new(parse_id(&p.id, "product")?),
        name: p.name,
        price: parse_decimal(&p.price, "product price")?,
        stock: parse_stock(p.stock)?,
    })
}

pub fn convert_updated_product(
    p: update_low_stock_products::UpdateLowStockProductsUpdateLowStockProductsUpdatedProducts,
) -> Result<Product, CrmError> {
    Ok(Product {
        id: ProductId::new(parse_id(&p.id, "product")?),
        name: p.name,
        price: parse_decimal(&p.price, "product price")?,
        stock: parse_stock(p.stock)?,
    })
}

pub fn convert_order(o: get_orders::GetOrdersOrders) -> Result<Order, CrmError> {
    Ok(Order {
        id: OrderId::new(parse_id(&o.id, "order")?),
        customer_id: CustomerId::new(parse_id(&o.customer.id, "customer")?),
        order_date: parse_datetime(&o.order_date, "order orderDate")?,
        total_amount: parse_decimal(&o.total_amount, "order totalAmount")?,
    })
}

pub fn convert_reminder(
    o: orders_last_week::OrdersLastWeekOrdersLastWeek,
) -> Result<OrderReminder, CrmError> {
    Ok(OrderReminder {
        order_id: OrderId::new(parse_id(&o.id, "order")?),
        customer_email: parse_email(&o.customer.email)?,
        order_date: parse_datetime(&o.order_date, "order orderDate")?,
    })
}
