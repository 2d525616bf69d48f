//! GraphQL operation definitions for the CRM service.
//!
//! The documents live under `graphql/queries/`; the SDL contract is
//! `graphql/schema.graphql`. Codegen happens at compile time through the
//! `GraphQLQuery` derive.

use graphql_client::GraphQLQuery;

// Custom scalars from the CRM schema.
// Must be defined in the same module where the GraphQLQuery derive is used,
// with names matching the schema scalar names exactly.
#[allow(clippy::upper_case_acronyms)]
type DateTime = String;
#[allow(clippy::upper_case_acronyms)]
type Decimal = String;

// Health probe
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/health.graphql",
    response_derives = "Debug, Clone"
)]
pub struct HelloQuery;

// Entity reads
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/customers.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetCustomers;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/products.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetProducts;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/products.graphql",
    response_derives = "Debug, Clone"
)]
pub struct LowStockProducts;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/orders.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetOrders;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/orders.graphql",
    response_derives = "Debug, Clone"
)]
pub struct OrdersLastWeek;

// Aggregates
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/stats.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetCrmStats;

// Mutations
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/restock.graphql",
    response_derives = "Debug, Clone"
)]
pub struct UpdateLowStockProducts;
