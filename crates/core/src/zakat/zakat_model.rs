//! Zakat domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The wealth components subject to zakat.
///
/// Which accounts and holdings feed these figures is a policy decision made
/// by the caller (see `ZakatService`); the calculator itself only applies
/// the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZakatWealthInputs {
    pub cash_and_bank: Decimal,
    pub investments: Decimal,
    pub real_estate_rent_income: Decimal,
    pub business_interests: Decimal,
}

/// Zakat calculation request at the reporting boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZakatRequest {
    pub gold_price_per_gram: Decimal,
    pub silver_price_per_gram: Decimal,
    pub use_gold_nisab: bool,
}

/// Computed zakat breakdown - ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZakatSnapshot {
    pub cash_and_bank: Decimal,
    pub investments: Decimal,
    pub real_estate_rent_income: Decimal,
    pub business_interests: Decimal,
    pub total_zakatable: Decimal,
    pub nisab_threshold: Decimal,
    pub is_above_nisab: bool,
    /// 2.5% of total_zakatable when above nisab, else zero; 2 dp
    pub zakat_due: Decimal,
}
