//! Balance reconciliation: batch edit-mode over a filtered account subset.

use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::reconcile_model::{CommitOutcome, FailedUpdate, ReconcileSession, SessionFilter};
use crate::accounts::{Account, AccountRepositoryTrait};
use crate::errors::Result;
use crate::Error;

/// Service driving reconciliation sessions against the account store.
pub struct ReconcileService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
}

impl ReconcileService {
    pub fn new(account_repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { account_repository }
    }

    /// Opens an edit-mode session over the accounts matching the filter,
    /// snapshotting their current balances as the baseline.
    pub fn open_session(&self, accounts: &[Account], filter: SessionFilter) -> ReconcileSession {
        let selected: Vec<Account> = accounts
            .iter()
            .filter(|a| filter.selects(a))
            .cloned()
            .collect();

        let baseline = selected
            .iter()
            .map(|a| (a.id.clone(), a.balance))
            .collect();

        // Remember which excluded accounts are auto-derived so an edit
        // against one fails as read-only rather than not-found.
        let read_only = accounts
            .iter()
            .filter_map(|a| a.source_type.map(|s| (a.id.clone(), s)))
            .collect();

        debug!(
            "Opened reconcile session: {} accounts ({:?})",
            selected.len(),
            filter.account_type
        );

        ReconcileSession {
            baseline,
            read_only,
            accounts: selected,
        }
    }

    /// Commits a batch of balance edits against the session baseline.
    ///
    /// Every edit is validated before any write: an edit targeting an
    /// auto-derived account fails the whole commit with
    /// [`Error::ReadOnlyAccount`], an unknown id with [`Error::NotFound`].
    /// Only edits that differ from the baseline by exact decimal inequality
    /// are written, one at a time; a failed write does not roll back the
    /// writes before it. The session is consumed.
    pub async fn commit(
        &self,
        session: ReconcileSession,
        edits: &HashMap<String, Decimal>,
    ) -> Result<CommitOutcome> {
        // Validate the whole edit set up front; no partial effect on error.
        for id in edits.keys() {
            if session.baseline.contains_key(id) {
                continue;
            }
            if let Some(source) = session.read_only.get(id) {
                return Err(Error::ReadOnlyAccount {
                    id: id.clone(),
                    source_type: source.as_str().to_string(),
                });
            }
            return Err(Error::NotFound(format!(
                "Account '{}' is not part of this session",
                id
            )));
        }

        // Minimal update set: only values that actually changed. Iterate the
        // session's account order so dispatch is deterministic.
        let mut outcome = CommitOutcome::default();
        for account in &session.accounts {
            let new_balance = match edits.get(&account.id) {
                Some(value) => *value,
                None => continue,
            };
            if new_balance == session.baseline[&account.id] {
                continue;
            }

            match self
                .account_repository
                .update_balance(&account.id, new_balance)
                .await
            {
                Ok(_) => outcome.applied.push(account.id.clone()),
                Err(e) => {
                    warn!("Balance update for account {} failed: {}", account.id, e);
                    outcome.failed.push(FailedUpdate {
                        id: account.id.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        debug!(
            "Reconcile commit: {} applied, {} failed",
            outcome.applied.len(),
            outcome.failed.len()
        );

        Ok(outcome)
    }
}
