//! Transactions module - models and store trait.

mod transactions_model;
mod transactions_traits;

pub use transactions_model::{Transaction, TransactionKind};
pub use transactions_traits::TransactionRepositoryTrait;
