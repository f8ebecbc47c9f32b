//! Investment store traits.
//!
//! The investment store is an external collaborator: creating or deleting a
//! holding there triggers (outside this crate) an auto-derived account in the
//! account store with the matching `source_type`. Core only consumes the
//! result of that sync.

use async_trait::async_trait;

use super::investments_model::{
    BusinessInterest, NewStockHolding, RealEstateProperty, StockHolding,
};
use crate::errors::Result;

/// Trait defining the contract for the investment store.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    fn list_stocks(&self) -> Result<Vec<StockHolding>>;

    fn list_real_estate(&self) -> Result<Vec<RealEstateProperty>>;

    fn list_businesses(&self) -> Result<Vec<BusinessInterest>>;

    async fn create_stock(&self, new_stock: NewStockHolding) -> Result<StockHolding>;

    async fn delete_stock(&self, stock_id: &str) -> Result<usize>;
}
