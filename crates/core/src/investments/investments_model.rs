//! Investment holding domain models.
//!
//! Holdings live in the investment store; their market values surface in the
//! purse as auto-derived accounts written by the sync pipeline (outside this
//! crate). Prices are user-supplied, never fetched.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A stock position.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockHolding {
    pub id: String,
    pub ticker: String,
    pub name: String,
    /// Share count; may be fractional
    pub shares: Decimal,
    /// Average cost per share
    pub avg_cost: Decimal,
    /// User-supplied current price per share
    pub current_price: Decimal,
    pub sector: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A real estate property.
///
/// Carries no per-unit price; `estimated_value` is the whole position. No
/// gain/loss is computed unless a cost basis was recorded.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateProperty {
    pub id: String,
    pub name: String,
    pub location: String,
    pub property_type: String,
    pub estimated_value: Decimal,
    pub monthly_rent: Decimal,
    pub cost_basis: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// An equity stake in a private business.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInterest {
    pub id: String,
    pub name: String,
    /// Ownership share, 0-100
    pub equity_percent: Decimal,
    /// Amount originally invested, when tracked
    pub invested_value: Option<Decimal>,
    pub current_value: Decimal,
    pub annual_income: Decimal,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a stock holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStockHolding {
    pub ticker: String,
    pub name: String,
    pub shares: Decimal,
    pub avg_cost: Decimal,
    pub current_price: Decimal,
    pub sector: Option<String>,
}

impl NewStockHolding {
    /// Validates the new holding data.
    pub fn validate(&self) -> Result<()> {
        if self.ticker.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "ticker".to_string(),
            )));
        }
        for (field, value) in [
            ("shares", self.shares),
            ("avgCost", self.avg_cost),
            ("currentPrice", self.current_price),
        ] {
            if value.is_sign_negative() {
                return Err(Error::Validation(ValidationError::NegativeAmount {
                    field: field.to_string(),
                    value: value.to_string(),
                }));
            }
        }
        Ok(())
    }
}
