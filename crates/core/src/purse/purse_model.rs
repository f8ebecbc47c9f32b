//! Purse domain models.
//!
//! Segments and totals are derived views over the account snapshot. They
//! carry no identity of their own and are recomputed on every read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::{Account, AccountCategory, AccountType};

/// A display-level grouping of accounts sharing type + category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub account_type: AccountType,
    pub category: AccountCategory,
    /// Display name derived from the category
    pub name: String,
    /// Sum of member balances as stored. Currencies are not converted;
    /// mixing currencies within a segment is permitted and labeled per
    /// account at the display layer.
    pub total_balance: Decimal,
    /// Member accounts, in store order
    pub sub_segments: Vec<Account>,
}

/// Grand totals over the whole purse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PurseTotals {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    /// total_assets - total_liabilities, exactly
    pub net_worth: Decimal,
}
