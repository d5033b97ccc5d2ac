use crate::errors::Result;
use crate::investments::investments_model::{
    Holding, HoldingRecord, HoldingUpdate, NewHolding, PortfolioSummary,
};
use async_trait::async_trait;

/// Trait for holding repository operations
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Holdings of a user in creation order.
    fn list(&self, user_id: &str) -> Result<Vec<Holding>>;
    async fn insert(&self, user_id: &str, record: HoldingRecord) -> Result<Holding>;
    async fn update(
        &self,
        user_id: &str,
        holding_id: &str,
        record: HoldingRecord,
    ) -> Result<Option<Holding>>;
    async fn delete(&self, user_id: &str, holding_id: &str) -> Result<usize>;
}

/// Trait for holding service operations
#[async_trait]
pub trait HoldingServiceTrait: Send + Sync {
    fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>>;
    fn get_summary(&self, user_id: &str) -> Result<PortfolioSummary>;
    async fn create_holding(&self, user_id: &str, new_holding: NewHolding) -> Result<Holding>;
    async fn update_holding(
        &self,
        user_id: &str,
        holding_id: &str,
        update: HoldingUpdate,
    ) -> Result<Holding>;
    async fn delete_holding(&self, user_id: &str, holding_id: &str) -> Result<String>;
}
