//! Core types for the CRM.
//!
//! This module provides type-safe wrappers for common domain concepts
//! and the entities the periodic jobs consume.

pub mod email;
pub mod entities;
pub mod id;

pub use email::{Email, EmailError};
pub use entities::{Customer, LOW_STOCK_THRESHOLD, Order, Product, RESTOCK_INCREMENT};
pub use id::*;
