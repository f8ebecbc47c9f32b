//! Portfolio valuation module.
//!
//! Computes market value and gain/loss per stock holding and aggregates
//! portfolio-level totals across stocks, real estate, and businesses.

mod portfolio_model;
mod portfolio_service;

pub use portfolio_model::*;
pub use portfolio_service::*;
