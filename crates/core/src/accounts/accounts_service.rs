use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::accounts_model::{Account, AccountFilter, AccountUpdate, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;
use crate::Error;

/// Service for managing accounts.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn guard_not_auto_derived(&self, account: &Account) -> Result<()> {
        if let Some(source) = account.source_type {
            return Err(Error::ReadOnlyAccount {
                id: account.id.clone(),
                source_type: source.as_str().to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;

        let mut new_account = new_account;
        if new_account.id.is_none() {
            new_account.id = Some(Uuid::new_v4().to_string());
        }
        debug!(
            "Creating account '{}' ({:?}/{:?})",
            new_account.name, new_account.account_type, new_account.category
        );

        self.repository.create(new_account).await
    }

    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;

        // The sync pipeline is the only writer for auto-derived accounts.
        let id = account_update.id.as_deref().unwrap_or_default();
        let existing = self.repository.get_by_id(id)?;
        self.guard_not_auto_derived(&existing)?;

        self.repository.update(account_update).await
    }

    async fn delete_account(&self, account_id: &str) -> Result<()> {
        let existing = self.repository.get_by_id(account_id)?;
        self.guard_not_auto_derived(&existing)?;

        self.repository.delete(account_id).await?;
        Ok(())
    }

    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }

    fn list_accounts(&self, filter: &AccountFilter) -> Result<Vec<Account>> {
        self.repository.list(filter)
    }

    fn get_leaf_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list(&AccountFilter::leaves())
    }
}
