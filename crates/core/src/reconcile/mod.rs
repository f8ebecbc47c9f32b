//! Balance reconciliation module.
//!
//! Drives the batch edit-mode flow: snapshot a filtered account subset,
//! diff edited balances against the baseline, and issue minimal best-effort
//! updates to the account store.

mod reconcile_model;
mod reconcile_service;

pub use reconcile_model::*;
pub use reconcile_service::*;
