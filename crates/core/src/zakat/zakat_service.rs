//! Zakat calculation: the fixed domain rule plus input assembly.

use log::debug;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::zakat_model::{ZakatRequest, ZakatSnapshot, ZakatWealthInputs};
use crate::accounts::{
    AccountFilter, AccountRepositoryTrait, AccountType, ZAKATABLE_CASH_CATEGORIES,
};
use crate::constants::{
    DISPLAY_DECIMAL_PRECISION, GOLD_NISAB_GRAMS, SILVER_NISAB_GRAMS, ZAKAT_RATE,
};
use crate::errors::{Result, ValidationError};
use crate::investments::InvestmentRepositoryTrait;
use crate::portfolio::{annual_rent, valuate_stock};
use crate::Error;

fn require_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() {
        return Err(Error::Validation(ValidationError::NegativeAmount {
            field: field.to_string(),
            value: value.to_string(),
        }));
    }
    Ok(())
}

/// Applies the zakat rule to a wealth snapshot.
///
/// total = cash + investments + rent income + business interests;
/// nisab = 85 g of gold or 595 g of silver at the supplied price;
/// due = 2.5% of the total when it reaches nisab, else zero.
///
/// Pure function. Negative inputs are rejected up front, never clamped.
pub fn calculate(
    inputs: &ZakatWealthInputs,
    gold_price_per_gram: Decimal,
    silver_price_per_gram: Decimal,
    use_gold_nisab: bool,
) -> Result<ZakatSnapshot> {
    require_non_negative("cashAndBank", inputs.cash_and_bank)?;
    require_non_negative("investments", inputs.investments)?;
    require_non_negative("realEstateRentIncome", inputs.real_estate_rent_income)?;
    require_non_negative("businessInterests", inputs.business_interests)?;
    require_non_negative("goldPricePerGram", gold_price_per_gram)?;
    require_non_negative("silverPricePerGram", silver_price_per_gram)?;

    let total_zakatable = inputs.cash_and_bank
        + inputs.investments
        + inputs.real_estate_rent_income
        + inputs.business_interests;

    let nisab_threshold = if use_gold_nisab {
        GOLD_NISAB_GRAMS * gold_price_per_gram
    } else {
        SILVER_NISAB_GRAMS * silver_price_per_gram
    };

    let is_above_nisab = total_zakatable >= nisab_threshold;
    let zakat_due = if is_above_nisab {
        (total_zakatable * ZAKAT_RATE).round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    };

    Ok(ZakatSnapshot {
        cash_and_bank: inputs.cash_and_bank,
        investments: inputs.investments,
        real_estate_rent_income: inputs.real_estate_rent_income,
        business_interests: inputs.business_interests,
        total_zakatable,
        nisab_threshold,
        is_above_nisab,
        zakat_due,
    })
}

/// Service assembling zakatable wealth from the stores and applying the rule.
pub struct ZakatService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl ZakatService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            investment_repository,
        }
    }

    /// Gathers the zakatable wealth components: cash and bank balances from
    /// the purse, stock market values, annualized rents, and business
    /// current values.
    pub fn gather_wealth_inputs(&self) -> Result<ZakatWealthInputs> {
        let cash_filter = AccountFilter {
            account_type: Some(AccountType::Asset),
            categories: Some(ZAKATABLE_CASH_CATEGORIES.to_vec()),
            ..AccountFilter::leaves()
        };
        let cash_and_bank: Decimal = self
            .account_repository
            .list(&cash_filter)?
            .iter()
            .map(|a| a.balance)
            .sum();

        let investments: Decimal = self
            .investment_repository
            .list_stocks()?
            .iter()
            .map(|s| valuate_stock(s).market_value)
            .sum();

        let real_estate_rent_income: Decimal = self
            .investment_repository
            .list_real_estate()?
            .iter()
            .map(annual_rent)
            .sum();

        let business_interests: Decimal = self
            .investment_repository
            .list_businesses()?
            .iter()
            .map(|b| b.current_value)
            .sum();

        Ok(ZakatWealthInputs {
            cash_and_bank,
            investments,
            real_estate_rent_income,
            business_interests,
        })
    }

    /// Computes the zakat breakdown for the current wealth snapshot.
    pub fn calculate_zakat(&self, request: &ZakatRequest) -> Result<ZakatSnapshot> {
        let inputs = self.gather_wealth_inputs()?;
        debug!(
            "Calculating zakat over total {}",
            inputs.cash_and_bank
                + inputs.investments
                + inputs.real_estate_rent_income
                + inputs.business_interests
        );
        calculate(
            &inputs,
            request.gold_price_per_gram,
            request.silver_price_per_gram,
            request.use_gold_nisab,
        )
    }
}
