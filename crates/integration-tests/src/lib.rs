//! Integration tests for the CRM job runner.
//!
//! The HTTP jobs are exercised end to end against a `wiremock` stub of
//! the Query/Mutation Service, with log files written into `tempfile`
//! directories. No live database or GraphQL server is required.
//!
//! # Test Categories
//!
//! - `heartbeat` - alive line plus failure-isolated health probe
//! - `low_stock` - restock mutation outcomes and log lines
//! - `order_reminders` - reminder lines and error surfacing
//! - `weekly_report` - aggregate report lines and failed outcomes

#![cfg_attr(not(test), forbid(unsafe_code))]
