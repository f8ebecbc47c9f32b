//! Mizan Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Mizan: purse aggregation,
//! balance reconciliation, portfolio valuation, and zakat calculation. It is
//! storage-agnostic and defines repository traits that are implemented by a
//! storage crate.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod investments;
pub mod portfolio;
pub mod purse;
pub mod reconcile;
pub mod reporting;
pub mod transactions;
pub mod utils;
pub mod zakat;

// Re-export common types from purse and portfolio modules
pub use portfolio::*;
pub use purse::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
