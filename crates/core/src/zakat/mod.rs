//! Zakat calculation module.
//!
//! Applies the fixed zakat rule (nisab thresholds in gold or silver weight,
//! 2.5% rate) to a wealth snapshot assembled from the account and investment
//! stores.

mod zakat_model;
mod zakat_service;

pub use zakat_model::*;
pub use zakat_service::*;
