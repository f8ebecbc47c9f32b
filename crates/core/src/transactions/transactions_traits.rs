//! Transaction store trait.

use chrono::NaiveDate;

use super::transactions_model::Transaction;
use crate::errors::Result;

/// Narrow read contract over the transaction store, enough to feed the
/// dashboard. Transaction CRUD itself lives outside core.
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Transactions on or after the given date, in store order.
    fn list_since(&self, date: NaiveDate) -> Result<Vec<Transaction>>;

    /// The most recent transactions, newest first.
    fn list_recent(&self, limit: usize) -> Result<Vec<Transaction>>;
}
