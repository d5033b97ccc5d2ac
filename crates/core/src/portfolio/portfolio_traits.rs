use crate::errors::Result;
use crate::portfolio::portfolio_model::{PortfolioSnapshot, PriceUpdate, RefreshResult};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for portfolio history repository operations
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Snapshots of a user ordered by date ascending.
    fn history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>>;

    /// Writes the new holding prices and upserts the `(user_id, snapshot.date)`
    /// snapshot in a single transaction.
    async fn record_price_refresh(
        &self,
        user_id: &str,
        updates: Vec<PriceUpdate>,
        snapshot: PortfolioSnapshot,
    ) -> Result<()>;
}

/// Trait for portfolio service operations
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    fn get_history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>>;
    /// Reprices every holding and records today's (UTC) portfolio value.
    async fn refresh_prices(&self, user_id: &str) -> Result<RefreshResult>;
    async fn refresh_prices_as_of(&self, user_id: &str, date: NaiveDate) -> Result<RefreshResult>;
}
