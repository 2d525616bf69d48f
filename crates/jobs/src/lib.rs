//! CRM periodic job runner.
//!
//! Five independent, stateless jobs over a CRM backend: heartbeat
//! logging, low-stock restocking, inactive-customer cleanup, order
//! reminders, and weekly reporting. Scheduling is external (cron, a
//! systemd timer, a task queue) and out of scope; this crate only
//! provides the job entry points and their contracts.
//!
//! # Modules
//!
//! - [`config`] - environment-driven configuration
//! - [`graphql`] - client for the external Query/Mutation Service
//! - [`db`] - direct store access (cleanup, seeding)
//! - [`joblog`] - append-only per-job result logs
//! - [`jobs`] - the five job entry points
//!
//! # Invocation contract
//!
//! The external scheduler initializes once (env, tracing, config) and
//! then calls one job per tick. Jobs take already-built handles - a
//! [`graphql::CrmClient`] or a `PgPool` - plus the [`joblog::JobLog`]
//! they should append to, and return typed outcomes; the scheduler
//! adapter decides what is fatal.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod graphql;
pub mod joblog;
pub mod jobs;

pub use config::CrmConfig;
pub use graphql::{CrmClient, CrmError};
pub use joblog::JobLog;
