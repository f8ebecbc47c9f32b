//! Dashboard snapshot assembly.

use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::reporting_model::{
    AllocationItem, CashFlowPoint, CategoryCashFlow, DashboardSnapshot, IncomeExpenseReport,
};
use crate::accounts::{
    category_key, Account, AccountFilter, AccountRepositoryTrait, AccountType,
};
use crate::constants::{
    DASHBOARD_WINDOW_MONTHS, DISPLAY_DECIMAL_PRECISION, RECENT_TRANSACTIONS_LIMIT,
};
use crate::errors::Result;
use crate::purse::totals;
use crate::transactions::Transaction;
use crate::transactions::{TransactionKind, TransactionRepositoryTrait};

/// Groups current-value accounts of one type by category and sums balances.
/// Allocation order follows first appearance in the account list.
pub fn allocation(accounts: &[Account], account_type: AccountType) -> Vec<AllocationItem> {
    let mut order: Vec<&'static str> = Vec::new();
    let mut values: HashMap<&'static str, Decimal> = HashMap::new();

    for account in accounts {
        if account.is_segment || !account.is_active || account.account_type != account_type {
            continue;
        }
        let key = category_key(account.category);
        if !values.contains_key(key) {
            order.push(key);
        }
        *values.entry(key).or_insert(Decimal::ZERO) += account.balance;
    }

    order
        .into_iter()
        .map(|key| AllocationItem {
            category: key.to_string(),
            value: values[key],
        })
        .collect()
}

/// Sums income and expenses over the window, broken down by transaction
/// category in first-seen order.
pub fn income_expense_report(transactions: &[Transaction], months: i64) -> IncomeExpenseReport {
    let mut order: Vec<String> = Vec::new();
    let mut by_category: HashMap<String, CategoryCashFlow> = HashMap::new();
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for t in transactions {
        let entry = by_category
            .entry(t.category.clone())
            .or_insert_with(|| {
                order.push(t.category.clone());
                CategoryCashFlow {
                    category: t.category.clone(),
                    income: Decimal::ZERO,
                    expense: Decimal::ZERO,
                }
            });
        match t.kind {
            TransactionKind::Income => {
                entry.income += t.amount;
                total_income += t.amount;
            }
            TransactionKind::Expense => {
                entry.expense += t.amount;
                total_expense += t.amount;
            }
        }
    }

    IncomeExpenseReport {
        period: format!("Last {} month(s)", months),
        total_income,
        total_expense,
        net: total_income - total_expense,
        by_category: order
            .into_iter()
            .map(|category| by_category.remove(&category).unwrap_or(CategoryCashFlow {
                category,
                income: Decimal::ZERO,
                expense: Decimal::ZERO,
            }))
            .collect(),
    }
}

/// Buckets transactions into a monthly inflow/outflow series, keyed
/// "YYYY-MM" and sorted ascending.
pub fn cash_flow_series(transactions: &[Transaction]) -> Vec<CashFlowPoint> {
    let mut monthly: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();

    for t in transactions {
        let key = t.date.format("%Y-%m").to_string();
        let entry = monthly.entry(key).or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.kind {
            TransactionKind::Income => entry.0 += t.amount,
            TransactionKind::Expense => entry.1 += t.amount,
        }
    }

    monthly
        .into_iter()
        .map(|(period, (inflow, outflow))| CashFlowPoint {
            period,
            inflow,
            outflow,
            net: inflow - outflow,
        })
        .collect()
}

/// Service producing the dashboard snapshot for the reporting boundary.
pub struct ReportingService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl ReportingService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            transaction_repository,
        }
    }

    /// Builds the dashboard snapshot as of `today`.
    ///
    /// The income/expense window is the trailing 30 days per month. Ratios
    /// are percentages rounded to 2 dp and zero when their denominator is
    /// zero - the snapshot never carries a NaN-like value.
    pub fn get_dashboard_snapshot(&self, today: NaiveDate) -> Result<DashboardSnapshot> {
        let accounts = self.account_repository.list(&AccountFilter::leaves())?;
        let purse = totals(&accounts);

        let window_start = today - Duration::days(DASHBOARD_WINDOW_MONTHS * 30);
        let transactions = self.transaction_repository.list_since(window_start)?;

        let mut monthly_income = Decimal::ZERO;
        let mut monthly_expense = Decimal::ZERO;
        for t in &transactions {
            match t.kind {
                TransactionKind::Income => monthly_income += t.amount,
                TransactionKind::Expense => monthly_expense += t.amount,
            }
        }

        let hundred = Decimal::from(100);
        let savings_rate = if monthly_income > Decimal::ZERO {
            ((monthly_income - monthly_expense) / monthly_income * hundred)
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };
        let debt_to_asset_ratio = if purse.total_assets > Decimal::ZERO {
            (purse.total_liabilities / purse.total_assets * hundred)
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };

        let recent_transactions = self
            .transaction_repository
            .list_recent(RECENT_TRANSACTIONS_LIMIT)?;

        debug!(
            "Dashboard snapshot: net_worth={}, {} transactions in window",
            purse.net_worth,
            transactions.len()
        );

        Ok(DashboardSnapshot {
            net_worth: purse.net_worth,
            total_assets: purse.total_assets,
            total_liabilities: purse.total_liabilities,
            monthly_income,
            monthly_expense,
            savings_rate,
            debt_to_asset_ratio,
            asset_allocation: allocation(&accounts, AccountType::Asset),
            liability_allocation: allocation(&accounts, AccountType::Liability),
            recent_transactions,
        })
    }

    /// Income/expense report over the trailing `months` window ending
    /// `today`.
    pub fn get_income_expense_report(
        &self,
        today: NaiveDate,
        months: i64,
    ) -> Result<IncomeExpenseReport> {
        let start = today - Duration::days(months * 30);
        let transactions = self.transaction_repository.list_since(start)?;
        Ok(income_expense_report(&transactions, months))
    }

    /// Monthly cash-flow series over the trailing `months` window ending
    /// `today`.
    pub fn get_cash_flow_series(
        &self,
        today: NaiveDate,
        months: i64,
    ) -> Result<Vec<CashFlowPoint>> {
        let start = today - Duration::days(months * 30);
        let transactions = self.transaction_repository.list_since(start)?;
        Ok(cash_flow_series(&transactions))
    }
}
