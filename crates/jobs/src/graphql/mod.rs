//! Client for the CRM Query/Mutation Service.
//!
//! # Architecture
//!
//! - Uses the `graphql-client` crate for type-safe GraphQL operations
//! - The service is external; requests go over plain HTTP via `reqwest`
//! - Every call is a single round-trip, no retries, no client-side state
//!
//! # Error taxonomy
//!
//! [`CrmError`] distinguishes transport failures (connection refused,
//! timeout), service failures (non-2xx status, GraphQL errors array),
//! and data-shape failures (unparseable response fields). The per-job
//! propagation policy lives with the jobs, not here.

mod client;
mod conversions;
pub mod queries;
mod types;

pub use client::CrmClient;
pub use types::{CrmStats, LowStockUpdate, OrderReminder};

use thiserror::Error;

/// Errors that can occur when talking to the Query/Mutation Service.
#[derive(Debug, Error)]
pub enum CrmError {
    /// HTTP request failed (connection refused, timeout, DNS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("GraphQL request failed with status: {0}")]
    Status(u16),

    /// The response carried a GraphQL errors array.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A response field was missing or held an unusable value.
    #[error("unexpected response shape: {0}")]
    DataShape(String),
}

/// A single error from a GraphQL response's errors array.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Path to the failing field, as JSON values.
    pub path: Vec<serde_json::Value>,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_owned();
    }

    errors
        .iter()
        .map(|e| {
            if e.path.is_empty() {
                e.message.clone()
            } else {
                let path = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                format!("{} (at {path})", e.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
