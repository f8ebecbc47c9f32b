//! Balance reconciliation domain models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::{Account, AccountType, SourceType};

/// Filter selecting the accounts eligible for a reconciliation session.
///
/// A session always operates on active, non-segment accounts of one side of
/// the purse; auto-derived accounts are excluded (read-only through this
/// path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionFilter {
    pub account_type: AccountType,
}

impl SessionFilter {
    pub fn assets() -> Self {
        Self {
            account_type: AccountType::Asset,
        }
    }

    pub fn liabilities() -> Self {
        Self {
            account_type: AccountType::Liability,
        }
    }

    pub(crate) fn selects(&self, account: &Account) -> bool {
        account.is_active
            && !account.is_segment
            && account.source_type.is_none()
            && account.account_type == self.account_type
    }
}

/// An open edit-mode session: the selected accounts plus a baseline snapshot
/// of their balances at open time. Consumed by commit.
#[derive(Debug, Clone)]
pub struct ReconcileSession {
    pub(crate) baseline: HashMap<String, Decimal>,
    /// Ids excluded from the session because they are auto-derived, kept so
    /// commit can distinguish a read-only target from an unknown one.
    pub(crate) read_only: HashMap<String, SourceType>,
    pub(crate) accounts: Vec<Account>,
}

impl ReconcileSession {
    /// The accounts under edit, in store order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Baseline balance captured at open time, if the id is in the session.
    pub fn baseline(&self, account_id: &str) -> Option<Decimal> {
        self.baseline.get(account_id).copied()
    }
}

/// A single failed update within a best-effort batch commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedUpdate {
    pub id: String,
    pub error: String,
}

/// Result of a batch commit.
///
/// The batch is best-effort: a failure partway through leaves earlier
/// updates committed. Callers re-read the aggregate afterward instead of
/// trusting the in-memory edit values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitOutcome {
    /// Ids whose balance update was applied, in dispatch order
    pub applied: Vec<String>,
    /// Updates that failed, with the store error for each
    pub failed: Vec<FailedUpdate>,
}

impl CommitOutcome {
    /// True when every issued update succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
