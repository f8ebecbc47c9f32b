//! Portfolio valuation: per-holding market value and portfolio totals.

use log::debug;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::portfolio_model::{PortfolioSummary, StockValuation};
use crate::constants::DECIMAL_PRECISION;
use crate::errors::Result;
use crate::investments::{
    BusinessInterest, InvestmentRepositoryTrait, RealEstateProperty, StockHolding,
};

/// Valuates a single stock holding.
///
/// Total function: a zero cost basis yields a zero gain fraction rather
/// than a division by zero.
pub fn valuate_stock(holding: &StockHolding) -> StockValuation {
    let market_value = holding.shares * holding.current_price;
    let cost_basis = holding.shares * holding.avg_cost;
    let gain_loss = market_value - cost_basis;
    let gain_loss_pct = if cost_basis.is_zero() {
        Decimal::ZERO
    } else {
        (gain_loss / cost_basis).round_dp(DECIMAL_PRECISION)
    };

    StockValuation {
        holding: holding.clone(),
        market_value,
        gain_loss,
        gain_loss_pct,
    }
}

/// Gain on a business stake; zero when no invested amount was recorded.
pub fn business_gain_loss(business: &BusinessInterest) -> Decimal {
    match business.invested_value {
        Some(invested) => business.current_value - invested,
        None => Decimal::ZERO,
    }
}

/// Annualized rent for a property.
pub fn annual_rent(property: &RealEstateProperty) -> Decimal {
    property.monthly_rent * Decimal::from(12)
}

/// Computes portfolio totals across the three holding kinds.
///
/// Plain sums, no currency conversion. Real estate contributes its
/// estimated value directly and no gain/loss.
pub fn valuate(
    stocks: &[StockHolding],
    properties: &[RealEstateProperty],
    businesses: &[BusinessInterest],
) -> PortfolioSummary {
    let mut total_stocks_value = Decimal::ZERO;
    let mut total_gain_loss = Decimal::ZERO;
    for stock in stocks {
        let valuation = valuate_stock(stock);
        total_stocks_value += valuation.market_value;
        total_gain_loss += valuation.gain_loss;
    }

    let total_real_estate_value: Decimal = properties.iter().map(|p| p.estimated_value).sum();

    let mut total_business_value = Decimal::ZERO;
    for business in businesses {
        total_business_value += business.current_value;
        total_gain_loss += business_gain_loss(business);
    }

    PortfolioSummary {
        total_stocks_value,
        total_real_estate_value,
        total_business_value,
        total_portfolio_value: total_stocks_value + total_real_estate_value + total_business_value,
        total_gain_loss,
    }
}

/// Service exposing portfolio valuations over the investment store.
pub struct PortfolioService {
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(investment_repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self {
            investment_repository,
        }
    }

    /// Valuation views for every stock holding, in store order.
    pub fn list_stock_valuations(&self) -> Result<Vec<StockValuation>> {
        let stocks = self.investment_repository.list_stocks()?;
        Ok(stocks.iter().map(valuate_stock).collect())
    }

    /// Current portfolio totals, freshly computed from the store.
    pub fn get_portfolio_summary(&self) -> Result<PortfolioSummary> {
        let stocks = self.investment_repository.list_stocks()?;
        let properties = self.investment_repository.list_real_estate()?;
        let businesses = self.investment_repository.list_businesses()?;
        debug!(
            "Valuating portfolio: {} stocks, {} properties, {} businesses",
            stocks.len(),
            properties.len(),
            businesses.len()
        );
        Ok(valuate(&stocks, &properties, &businesses))
    }
}
