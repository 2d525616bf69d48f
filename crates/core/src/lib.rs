//! CRM Core - Shared types library.
//!
//! This crate provides common types used across the CRM components:
//! - `jobs` - Periodic job runner (heartbeat, restocking, cleanup, reminders, reporting)
//! - `cli` - Command-line tools for job invocation and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails, plus the
//!   `Customer`/`Product`/`Order` domain entities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
