//! Reporting boundary models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::Transaction;

/// One category's share of the asset or liability side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationItem {
    /// Category key (snake_case)
    pub category: String,
    pub value: Decimal,
}

/// Income and expense totals for one transaction category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCashFlow {
    pub category: String,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Income/expense report over a trailing window, with per-category
/// breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeExpenseReport {
    /// Human-readable window label, e.g. "Last 3 month(s)"
    pub period: String,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// total_income - total_expense
    pub net: Decimal,
    pub by_category: Vec<CategoryCashFlow>,
}

/// One month of the cash-flow series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPoint {
    /// Month key, "YYYY-MM"
    pub period: String,
    pub inflow: Decimal,
    pub outflow: Decimal,
    /// inflow - outflow
    pub net: Decimal,
}

/// Snapshot consumed by the dashboard UI.
///
/// Recomputed per request from current account and transaction state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub net_worth: Decimal,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expense: Decimal,
    /// (income - expense) / income as a percentage, 2 dp; zero when there
    /// was no income
    pub savings_rate: Decimal,
    /// liabilities / assets as a percentage, 2 dp; zero when there are no
    /// assets
    pub debt_to_asset_ratio: Decimal,
    pub asset_allocation: Vec<AllocationItem>,
    pub liability_allocation: Vec<AllocationItem>,
    /// Most recent transactions, newest first
    pub recent_transactions: Vec<Transaction>,
}
