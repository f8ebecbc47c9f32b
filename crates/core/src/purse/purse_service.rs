//! Purse aggregation: rolls account balances up into segments and totals.

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::purse_model::{PurseTotals, Segment};
use crate::accounts::{
    segment_display_name, Account, AccountCategory, AccountRepositoryTrait, AccountType,
    AccountFilter,
};
use crate::errors::Result;

/// Groups active, non-segment accounts into segments by (type, category).
///
/// Segments are emitted in first-seen category order; members keep the
/// input (store) order. Pure function of the snapshot: no side effects,
/// no currency conversion.
pub fn aggregate(accounts: &[Account]) -> Vec<Segment> {
    let mut order: Vec<(AccountType, AccountCategory)> = Vec::new();
    let mut members: HashMap<(AccountType, AccountCategory), Vec<Account>> = HashMap::new();

    for account in accounts {
        if account.is_segment || !account.is_active {
            continue;
        }
        let key = (account.account_type, account.category);
        if !members.contains_key(&key) {
            order.push(key);
        }
        members.entry(key).or_default().push(account.clone());
    }

    order
        .into_iter()
        .map(|key| {
            let sub_segments = members.remove(&key).unwrap_or_default();
            let total_balance: Decimal = sub_segments.iter().map(|a| a.balance).sum();
            Segment {
                account_type: key.0,
                category: key.1,
                name: segment_display_name(key.1).to_string(),
                total_balance,
                sub_segments,
            }
        })
        .collect()
}

/// Computes grand totals over the snapshot.
///
/// Totals are computed from the account TYPE, never from the category
/// string: a liability whose category is "mortgage" still counts toward
/// liabilities.
pub fn totals(accounts: &[Account]) -> PurseTotals {
    let mut total_assets = Decimal::ZERO;
    let mut total_liabilities = Decimal::ZERO;

    for account in accounts {
        if account.is_segment || !account.is_active {
            continue;
        }
        match account.account_type {
            AccountType::Asset => total_assets += account.balance,
            AccountType::Liability => total_liabilities += account.balance,
        }
    }

    PurseTotals {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
    }
}

/// Service exposing the purse views over the account store.
pub struct PurseService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
}

impl PurseService {
    pub fn new(account_repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { account_repository }
    }

    /// Current segments, freshly aggregated from the store.
    pub fn get_purse(&self) -> Result<Vec<Segment>> {
        let accounts = self.account_repository.list(&AccountFilter::leaves())?;
        debug!("Aggregating purse over {} accounts", accounts.len());
        Ok(aggregate(&accounts))
    }

    /// Current grand totals.
    pub fn get_totals(&self) -> Result<PurseTotals> {
        let accounts = self.account_repository.list(&AccountFilter::leaves())?;
        Ok(totals(&accounts))
    }
}
