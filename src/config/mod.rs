//! Configuration module for gridsheet
//!
//! Provides types and parsing for `gridsheet.toml` configuration.

pub mod loader;
pub mod schema;

pub use schema::*;
