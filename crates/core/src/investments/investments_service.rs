use async_trait::async_trait;
use std::sync::Arc;

use super::investments_model::{Holding, HoldingUpdate, NewHolding, PortfolioSummary};
use super::investments_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
use crate::errors::{Error, Result};

pub struct HoldingService {
    repository: Arc<dyn HoldingRepositoryTrait>,
}

impl HoldingService {
    pub fn new(repository: Arc<dyn HoldingRepositoryTrait>) -> Self {
        HoldingService { repository }
    }
}

fn holding_not_found() -> Error {
    Error::NotFound("Holding".to_string())
}

#[async_trait]
impl HoldingServiceTrait for HoldingService {
    fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>> {
        self.repository.list(user_id)
    }

    fn get_summary(&self, user_id: &str) -> Result<PortfolioSummary> {
        let holdings = self.repository.list(user_id)?;
        PortfolioSummary::from_holdings(&holdings)
    }

    async fn create_holding(&self, user_id: &str, new_holding: NewHolding) -> Result<Holding> {
        let record = new_holding.into_record()?;
        self.repository.insert(user_id, record).await
    }

    async fn update_holding(
        &self,
        user_id: &str,
        holding_id: &str,
        update: HoldingUpdate,
    ) -> Result<Holding> {
        let record = update.into_record()?;
        self.repository
            .update(user_id, holding_id, record)
            .await?
            .ok_or_else(holding_not_found)
    }

    async fn delete_holding(&self, user_id: &str, holding_id: &str) -> Result<String> {
        if self.repository.delete(user_id, holding_id).await? == 0 {
            return Err(holding_not_found());
        }
        Ok(holding_id.to_string())
    }
}
