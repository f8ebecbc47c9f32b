//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::accounts_model::{Account, AccountFilter, AccountUpdate, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations of this trait handle the persistence of account data.
/// The trait is storage-agnostic - backend-specific details are handled
/// by concrete implementations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Updates an existing account.
    async fn update(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Updates only the balance of an account. Used by the balance
    /// reconciler to issue minimal writes.
    async fn update_balance(&self, account_id: &str, balance: Decimal) -> Result<Account>;

    /// Deletes an account by its ID. Returns the number of deleted records.
    async fn delete(&self, account_id: &str) -> Result<usize>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists accounts matching the filter, in store order.
    fn list(&self, filter: &AccountFilter) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer handles business logic and coordinates between
/// repositories and other services.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Updates an existing account with business validation. Rejects
    /// auto-derived accounts.
    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Deletes an account. Rejects auto-derived accounts.
    async fn delete_account(&self, account_id: &str) -> Result<()>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Lists accounts matching a filter.
    fn list_accounts(&self, filter: &AccountFilter) -> Result<Vec<Account>>;

    /// Gets the active, non-segment accounts that participate in rollups.
    fn get_leaf_accounts(&self) -> Result<Vec<Account>>;
}
