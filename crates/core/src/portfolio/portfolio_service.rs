use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use std::sync::Arc;

use super::portfolio_model::{total_market_value, PortfolioSnapshot, PriceUpdate, RefreshResult};
use super::portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use super::price_source::PriceSource;
use crate::errors::Result;
use crate::investments::{Holding, HoldingRepositoryTrait};
use crate::utils::time_utils::today_utc;

pub struct PortfolioService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    price_source: Arc<dyn PriceSource>,
}

impl PortfolioService {
    pub fn new(
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
        price_source: Arc<dyn PriceSource>,
    ) -> Self {
        PortfolioService {
            holding_repository,
            portfolio_repository,
            price_source,
        }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    fn get_history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>> {
        self.portfolio_repository.history(user_id)
    }

    async fn refresh_prices(&self, user_id: &str) -> Result<RefreshResult> {
        self.refresh_prices_as_of(user_id, today_utc()).await
    }

    async fn refresh_prices_as_of(&self, user_id: &str, date: NaiveDate) -> Result<RefreshResult> {
        let holdings = self.holding_repository.list(user_id)?;

        let repriced: Vec<Holding> = holdings
            .into_iter()
            .map(|holding| {
                let current_price = self.price_source.next_price(&holding);
                debug!(
                    "{}: {} -> {}",
                    holding.ticker, holding.current_price, current_price
                );
                Holding {
                    current_price,
                    ..holding
                }
            })
            .collect();

        let updates = repriced
            .iter()
            .map(|h| PriceUpdate {
                holding_id: h.id.clone(),
                current_price: h.current_price,
            })
            .collect();
        let snapshot = PortfolioSnapshot {
            date,
            value: total_market_value(&repriced)?,
        };

        self.portfolio_repository
            .record_price_refresh(user_id, updates, snapshot.clone())
            .await?;
        info!(
            "Refreshed {} holdings for user {}, portfolio value {} on {}",
            repriced.len(),
            user_id,
            snapshot.value,
            snapshot.date
        );

        Ok(RefreshResult {
            holdings: self.holding_repository.list(user_id)?,
            history: snapshot,
        })
    }
}
