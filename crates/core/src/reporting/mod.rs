//! Reporting module.
//!
//! Produces the dashboard snapshot consumed by the UI: purse totals,
//! trailing income/expense, allocations by category, recent transactions.

mod reporting_model;
mod reporting_service;

pub use reporting_model::*;
pub use reporting_service::*;

#[cfg(test)]
mod reporting_service_tests;
