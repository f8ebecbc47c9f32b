//! Portfolio valuation models - derived views, never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::investments::StockHolding;

/// Valuation view of a single stock holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockValuation {
    pub holding: StockHolding,
    /// shares x current_price
    pub market_value: Decimal,
    /// market_value - shares x avg_cost
    pub gain_loss: Decimal,
    /// gain_loss / cost basis, as a fraction (0.5 = 50%).
    /// Zero when the cost basis is zero.
    pub gain_loss_pct: Decimal,
}

/// Portfolio-level totals across stocks, real estate, and businesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_stocks_value: Decimal,
    pub total_real_estate_value: Decimal,
    pub total_business_value: Decimal,
    /// Sum of the three totals above
    pub total_portfolio_value: Decimal,
    /// Stock gains plus business gains where a cost basis exists; real
    /// estate has no stored cost basis and contributes none.
    pub total_gain_loss: Decimal,
}
