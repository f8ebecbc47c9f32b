//! Investments module - holding models and store traits.

mod investments_model;
mod investments_traits;


pub use investments_model::{
    BusinessInterest, NewStockHolding, RealEstateProperty, StockHolding,
};
pub use investments_traits::InvestmentRepositoryTrait;
