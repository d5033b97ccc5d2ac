//! Investments module - user-owned holdings and their valuation.

mod investments_model;
mod investments_service;
mod investments_traits;

#[cfg(test)]
mod investments_service_tests;

pub use investments_model::{
    Holding, HoldingPerformance, HoldingRecord, HoldingUpdate, NewHolding, PortfolioSummary,
};
pub use investments_service::HoldingService;
pub use investments_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
