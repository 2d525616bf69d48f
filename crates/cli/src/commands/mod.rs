//! CLI command implementations.

pub mod cleanup;
pub mod migrate;
pub mod run;
pub mod seed;
