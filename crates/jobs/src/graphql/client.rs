//! HTTP client for the CRM Query/Mutation Service.

use std::sync::Arc;
use std::time::Duration;

use graphql_client::{GraphQLQuery, Response};
use tracing::{debug, instrument};

use crm_core::{Customer, Order, Product};

use super::conversions::{
    convert_customer, convert_low_stock_product, convert_order, convert_product,
    convert_reminder, convert_updated_product,
};
use super::queries::{
    GetCrmStats, GetCustomers, GetOrders, GetProducts, HelloQuery, LowStockProducts,
    OrdersLastWeek, UpdateLowStockProducts, get_crm_stats, get_customers, get_orders,
    get_products, hello_query, low_stock_products, orders_last_week, update_low_stock_products,
};
use super::types::{CrmStats, LowStockUpdate, OrderReminder};
use super::{CrmError, GraphQLError};

/// Timeout for read and mutation round-trips.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shorter timeout for the heartbeat's health probe; a slow endpoint is
/// as good as a dead one for liveness purposes.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the CRM GraphQL service.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct CrmClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    endpoint: String,
}

impl CrmClient {
    /// Create a client for the given GraphQL endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: reqwest::Client::new(),
                endpoint: endpoint.into(),
            }),
        }
    }

    /// The endpoint this client targets.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Execute a GraphQL operation and return its data.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        timeout: Duration,
    ) -> Result<Q::ResponseData, CrmError>
    where
        Q::Variables: serde::Serialize,
    {
        let request_body = Q::build_query(variables);

        let response = self
            .inner
            .http
            .post(&self.inner.endpoint)
            .timeout(timeout)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "CRM service returned non-success status"
            );
            return Err(CrmError::Status(status.as_u16()));
        }

        let response: Response<Q::ResponseData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse CRM GraphQL response"
                );
                return Err(CrmError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            debug!(errors = ?errors, "GraphQL errors in response");
            return Err(CrmError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| GraphQLError {
                        message: e.message,
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                    })
                    .collect(),
            ));
        }

        response.data.ok_or_else(|| {
            CrmError::DataShape("response has neither data nor errors".to_owned())
        })
    }

    /// Liveness probe against the service's `hello` field.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, slow, or answers
    /// without the expected field.
    #[instrument(skip(self))]
    pub async fn hello(&self) -> Result<String, CrmError> {
        let data = self
            .execute::<HelloQuery>(hello_query::Variables, PROBE_TIMEOUT)
            .await?;
        Ok(data.hello)
    }

    /// Fetch all customers.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, service, or data-shape failure.
    #[instrument(skip(self))]
    pub async fn customers(&self) -> Result<Vec<Customer>, CrmError> {
        let data = self
            .execute::<GetCustomers>(get_customers::Variables, REQUEST_TIMEOUT)
            .await?;
        data.customers.into_iter().map(convert_customer).collect()
    }

    /// Fetch all products.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, service, or data-shape failure.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CrmError> {
        let data = self
            .execute::<GetProducts>(get_products::Variables, REQUEST_TIMEOUT)
            .await?;
        data.products.into_iter().map(convert_product).collect()
    }

    /// Fetch all orders.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, service, or data-shape failure.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, CrmError> {
        let data = self
            .execute::<GetOrders>(get_orders::Variables, REQUEST_TIMEOUT)
            .await?;
        data.orders.into_iter().map(convert_order).collect()
    }

    /// Orders placed within the trailing 7 days, each resolved with its
    /// customer's email.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, service, or data-shape failure.
    #[instrument(skip(self))]
    pub async fn orders_last_week(&self) -> Result<Vec<OrderReminder>, CrmError> {
        let data = self
            .execute::<OrdersLastWeek>(orders_last_week::Variables, REQUEST_TIMEOUT)
            .await?;
        data.orders_last_week
            .into_iter()
            .map(convert_reminder)
            .collect()
    }

    /// Products currently below the restocking threshold.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, service, or data-shape failure.
    #[instrument(skip(self))]
    pub async fn low_stock_products(&self) -> Result<Vec<Product>, CrmError> {
        let data = self
            .execute::<LowStockProducts>(low_stock_products::Variables, REQUEST_TIMEOUT)
            .await?;
        data.low_stock_products
            .into_iter()
            .map(convert_low_stock_product)
            .collect()
    }

    /// Aggregate statistics for the weekly report.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, service, or data-shape failure.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<CrmStats, CrmError> {
        let data = self
            .execute::<GetCrmStats>(get_crm_stats::Variables, REQUEST_TIMEOUT)
            .await?;
        Ok(CrmStats {
            total_customers: data.total_customers,
            total_orders: data.total_orders,
            total_revenue: data.total_revenue,
        })
    }

    /// Ask the service to restock every low-stock product.
    ///
    /// A `success: false` payload is returned as data, not as an error;
    /// the caller owns that policy.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, service, or data-shape failure.
    #[instrument(skip(self))]
    pub async fn update_low_stock(&self) -> Result<LowStockUpdate, CrmError> {
        let data = self
            .execute::<UpdateLowStockProducts>(
                update_low_stock_products::Variables,
                REQUEST_TIMEOUT,
            )
            .await?;
        let payload = data.update_low_stock_products;
        Ok(LowStockUpdate {
            success: payload.success,
            message: payload.message,
            updated_products: payload
                .updated_products
                .into_iter()
                .map(convert_updated_product)
                .collect::<Result<_, _>>()?,
        })
    }
}
