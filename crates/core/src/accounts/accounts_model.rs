//! Account domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Whether an account sits on the asset or the liability side of the purse.
///
/// Totals are always computed from this type, never from [`AccountCategory`]:
/// a mortgage-category account is a liability through its type even though
/// its category string is not "liability".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    Asset,
    Liability,
}

/// Category tag used for segment grouping and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountCategory {
    Cash,
    Bank,
    Investment,
    Property,
    Vehicle,
    Equipment,
    Crypto,
    Gold,
    Business,
    Loan,
    CreditCard,
    Mortgage,
    #[default]
    Other,
    Liability,
}

/// Origin of an auto-derived account balance.
///
/// A non-None `source_type` marks the account as owned by the investment
/// sync pipeline: its balance is recomputed from the source holding and it is
/// read-only through the manual edit paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Stock,
    RealEstate,
    Business,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Stock => "stock",
            SourceType::RealEstate => "real_estate",
            SourceType::Business => "business",
        }
    }
}

/// Domain model representing an account in the system.
///
/// An account with `is_segment = true` is a grouping node: it carries no
/// balance of its own in rollups beyond the sum of its members.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: AccountType,
    pub category: AccountCategory,
    /// Balance in the account's own currency, as stored. No conversion.
    pub balance: Decimal,
    /// ISO 4217 code
    pub currency: String,
    pub is_segment: bool,
    pub is_active: bool,
    /// Set when the balance is maintained by the investment sync pipeline
    pub source_type: Option<SourceType>,
    /// Id of the holding this account was derived from
    pub source_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Account {
    /// True when the account balance is owned by the sync pipeline and must
    /// not be hand-edited or deleted.
    pub fn is_auto_derived(&self) -> bool {
        self.source_type.is_some()
    }
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub account_type: AccountType,
    pub category: AccountCategory,
    pub balance: Decimal,
    pub currency: String,
    pub is_segment: bool,
    pub is_active: bool,
    pub source_type: Option<SourceType>,
    pub source_id: Option<String>,
    pub notes: Option<String>,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Currency cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub id: Option<String>,
    pub name: String,
    pub account_type: AccountType,
    pub category: AccountCategory,
    pub balance: Decimal,
    pub is_active: bool,
    pub notes: Option<String>,
}

impl AccountUpdate {
    /// Validates the account update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Filter used when listing accounts from the store.
#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    pub is_active: Option<bool>,
    pub is_segment: Option<bool>,
    pub account_type: Option<AccountType>,
    pub categories: Option<Vec<AccountCategory>>,
}

impl AccountFilter {
    /// Active, non-segment accounts - the working set for aggregation.
    pub fn leaves() -> Self {
        Self {
            is_active: Some(true),
            is_segment: Some(false),
            ..Default::default()
        }
    }

    /// Returns true when the account passes every set field of the filter.
    pub fn matches(&self, account: &Account) -> bool {
        if let Some(active) = self.is_active {
            if account.is_active != active {
                return false;
            }
        }
        if let Some(segment) = self.is_segment {
            if account.is_segment != segment {
                return false;
            }
        }
        if let Some(account_type) = self.account_type {
            if account.account_type != account_type {
                return false;
            }
        }
        if let Some(ref categories) = self.categories {
            if !categories.contains(&account.category) {
                return false;
            }
        }
        true
    }
}
