//! Portfolio module - daily value history and the price refresh flow.

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;
mod price_source;


pub use portfolio_model::{total_market_value, PortfolioSnapshot, PriceUpdate, RefreshResult};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
pub use price_source::{PriceSource, SimulatedPriceSource};
