//! Purse aggregation module.
//!
//! This module rolls up account balances into segments (type + category
//! groupings) and grand totals (assets, liabilities, net worth).

mod purse_model;
mod purse_service;

pub use purse_model::*;
pub use purse_service::*;
