//! Unit tests for the reporting service.

use super::*;
use crate::accounts::{
    Account, AccountCategory, AccountFilter, AccountRepositoryTrait, AccountType, AccountUpdate,
    NewAccount,
};
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionKind, TransactionRepositoryTrait};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockAccountRepository {
    accounts: Vec<Account>,
}

#[async_trait]
impl AccountRepositoryTrait for MockAccountRepository {
    async fn create(&self, _new_account: NewAccount) -> Result<Account> {
        unimplemented!()
    }

    async fn update(&self, _account_update: AccountUpdate) -> Result<Account> {
        unimplemented!()
    }

    async fn update_balance(&self, _account_id: &str, _balance: Decimal) -> Result<Account> {
        unimplemented!()
    }

    async fn delete(&self, _account_id: &str) -> Result<usize> {
        unimplemented!()
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.accounts
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
            .ok_or_else(|| crate::Error::NotFound(format!("Account {} not found", account_id)))
    }

    fn list(&self, filter: &AccountFilter) -> Result<Vec<Account>> {
        Ok(self
            .accounts
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }
}

struct MockTransactionRepository {
    transactions: Vec<Transaction>,
}

impl TransactionRepositoryTrait for MockTransactionRepository {
    fn list_since(&self, date: NaiveDate) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.date >= date)
            .cloned()
            .collect())
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<Transaction>> {
        let mut sorted = self.transactions.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(limit);
        Ok(sorted)
    }
}

fn account(
    id: &str,
    account_type: AccountType,
    category: AccountCategory,
    balance: Decimal,
) -> Account {
    Account {
        id: id.to_string(),
        name: format!("Account {}", id),
        account_type,
        category,
        balance,
        currency: "USD".to_string(),
        is_segment: false,
        is_active: true,
        ..Default::default()
    }
}

fn transaction(id: &str, kind: TransactionKind, amount: Decimal, date: NaiveDate) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        kind,
        category: "general".to_string(),
        date,
        description: None,
    }
}

// ============================================================================
// Allocation
// ============================================================================

#[test]
fn test_allocation_groups_by_category_per_type() {
    let accounts = vec![
        account("1", AccountType::Asset, AccountCategory::Cash, dec!(100)),
        account("2", AccountType::Asset, AccountCategory::Bank, dec!(400)),
        account("3", AccountType::Asset, AccountCategory::Cash, dec!(50)),
        account(
            "4",
            AccountType::Liability,
            AccountCategory::Loan,
            dec!(700),
        ),
    ];

    let assets = allocation(&accounts, AccountType::Asset);
    assert_eq!(
        assets,
        vec![
            AllocationItem {
                category: "cash".to_string(),
                value: dec!(150),
            },
            AllocationItem {
                category: "bank".to_string(),
                value: dec!(400),
            },
        ]
    );

    let liabilities = allocation(&accounts, AccountType::Liability);
    assert_eq!(liabilities.len(), 1);
    assert_eq!(liabilities[0].category, "loan");
    assert_eq!(liabilities[0].value, dec!(700));
}

// ============================================================================
// Income/expense and cash flow
// ============================================================================

fn categorized(
    id: &str,
    kind: TransactionKind,
    category: &str,
    amount: Decimal,
    date: NaiveDate,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        kind,
        category: category.to_string(),
        date,
        description: None,
    }
}

#[test]
fn test_income_expense_report_breaks_down_by_category() {
    let march = |day| NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
    let transactions = vec![
        categorized("t1", TransactionKind::Income, "salary", dec!(2000), march(1)),
        categorized("t2", TransactionKind::Expense, "rent", dec!(800), march(2)),
        categorized("t3", TransactionKind::Expense, "salary", dec!(50), march(5)),
        categorized("t4", TransactionKind::Expense, "rent", dec!(100), march(20)),
    ];

    let report = income_expense_report(&transactions, 1);

    assert_eq!(report.period, "Last 1 month(s)");
    assert_eq!(report.total_income, dec!(2000));
    assert_eq!(report.total_expense, dec!(950));
    assert_eq!(report.net, dec!(1050));
    assert_eq!(
        report.by_category,
        vec![
            CategoryCashFlow {
                category: "salary".to_string(),
                income: dec!(2000),
                expense: dec!(50),
            },
            CategoryCashFlow {
                category: "rent".to_string(),
                income: dec!(0),
                expense: dec!(900),
            },
        ]
    );
}

#[test]
fn test_income_expense_report_empty_window() {
    let report = income_expense_report(&[], 3);
    assert_eq!(report.period, "Last 3 month(s)");
    assert_eq!(report.net, dec!(0));
    assert!(report.by_category.is_empty());
}

#[test]
fn test_cash_flow_series_buckets_by_month() {
    let transactions = vec![
        categorized(
            "t1",
            TransactionKind::Income,
            "salary",
            dec!(2000),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
        ),
        categorized(
            "t2",
            TransactionKind::Expense,
            "rent",
            dec!(800),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        ),
        categorized(
            "t3",
            TransactionKind::Income,
            "salary",
            dec!(2000),
            NaiveDate::from_ymd_opt(2026, 3, 28).unwrap(),
        ),
    ];

    let series = cash_flow_series(&transactions);

    assert_eq!(
        series,
        vec![
            CashFlowPoint {
                period: "2026-02".to_string(),
                inflow: dec!(2000),
                outflow: dec!(0),
                net: dec!(2000),
            },
            CashFlowPoint {
                period: "2026-03".to_string(),
                inflow: dec!(2000),
                outflow: dec!(800),
                net: dec!(1200),
            },
        ]
    );
}

#[test]
fn test_report_service_windows_filter_old_transactions() {
    let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let account_repo = Arc::new(MockAccountRepository { accounts: vec![] });
    let transaction_repo = Arc::new(MockTransactionRepository {
        transactions: vec![
            categorized("t1", TransactionKind::Income, "salary", dec!(2000), today),
            // Before the 1-month window, inside the 6-month one
            categorized(
                "t2",
                TransactionKind::Expense,
                "rent",
                dec!(800),
                NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            ),
        ],
    });
    let service = ReportingService::new(account_repo, transaction_repo);

    let report = service.get_income_expense_report(today, 1).unwrap();
    assert_eq!(report.total_income, dec!(2000));
    assert_eq!(report.total_expense, dec!(0));

    let series = service.get_cash_flow_series(today, 6).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].period, "2026-01");
    assert_eq!(series[1].period, "2026-03");
}

// ============================================================================
// Dashboard snapshot
// ============================================================================

#[test]
fn test_dashboard_snapshot() {
    let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();

    let account_repo = Arc::new(MockAccountRepository {
        accounts: vec![
            account("1", AccountType::Asset, AccountCategory::Cash, dec!(4000)),
            account(
                "2",
                AccountType::Liability,
                AccountCategory::Mortgage,
                dec!(1000),
            ),
        ],
    });
    let transaction_repo = Arc::new(MockTransactionRepository {
        transactions: vec![
            transaction(
                "t1",
                TransactionKind::Income,
                dec!(2000),
                NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            ),
            transaction(
                "t2",
                TransactionKind::Expense,
                dec!(500),
                NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            ),
            // Outside the 30-day window
            transaction(
                "t3",
                TransactionKind::Expense,
                dec!(9999),
                NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            ),
        ],
    });

    let service = ReportingService::new(account_repo, transaction_repo);
    let snapshot = service.get_dashboard_snapshot(today).unwrap();

    assert_eq!(snapshot.total_assets, dec!(4000));
    assert_eq!(snapshot.total_liabilities, dec!(1000));
    assert_eq!(snapshot.net_worth, dec!(3000));
    assert_eq!(snapshot.monthly_income, dec!(2000));
    assert_eq!(snapshot.monthly_expense, dec!(500));
    assert_eq!(snapshot.savings_rate, dec!(75.00));
    assert_eq!(snapshot.debt_to_asset_ratio, dec!(25.00));
    assert_eq!(snapshot.asset_allocation.len(), 1);
    assert_eq!(snapshot.liability_allocation[0].category, "mortgage");
    // Recent list is newest first and capped
    assert_eq!(snapshot.recent_transactions.len(), 3);
    assert_eq!(snapshot.recent_transactions[0].id, "t2");
}

#[test]
fn test_dashboard_ratios_guard_zero_denominators() {
    let account_repo = Arc::new(MockAccountRepository { accounts: vec![] });
    let transaction_repo = Arc::new(MockTransactionRepository {
        transactions: vec![],
    });

    let service = ReportingService::new(account_repo, transaction_repo);
    let snapshot = service
        .get_dashboard_snapshot(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap())
        .unwrap();

    assert_eq!(snapshot.savings_rate, dec!(0));
    assert_eq!(snapshot.debt_to_asset_ratio, dec!(0));
    assert!(snapshot.recent_transactions.is_empty());
}
