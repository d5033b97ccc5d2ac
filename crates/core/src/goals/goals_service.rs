use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::goals_model::{Goal, GoalProgress, GoalUpdate, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Error, Result};
use crate::utils::validation::require_positive;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }
}

fn goal_not_found() -> Error {
    Error::NotFound("Goal".to_string())
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.list(user_id)
    }

    fn get_goal_progress(&self, user_id: &str) -> Result<Vec<GoalProgress>> {
        Ok(self
            .goal_repo
            .list(user_id)?
            .iter()
            .map(GoalProgress::from)
            .collect())
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let record = new_goal.into_record()?;
        self.goal_repo.insert(user_id, record).await
    }

    async fn update_goal(&self, user_id: &str, goal_id: &str, update: GoalUpdate) -> Result<Goal> {
        let record = update.into_record()?;
        self.goal_repo
            .update(user_id, goal_id, record)
            .await?
            .ok_or_else(goal_not_found)
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<String> {
        if self.goal_repo.delete(user_id, goal_id).await? == 0 {
            return Err(goal_not_found());
        }
        Ok(goal_id.to_string())
    }

    async fn contribute(&self, user_id: &str, goal_id: &str, amount: Decimal) -> Result<Goal> {
        require_positive("amount", amount)?;
        let goal = self
            .goal_repo
            .get(user_id, goal_id)?
            .ok_or_else(goal_not_found)?;
        let new_amount = goal.amount_after_contribution(amount);
        debug!(
            "Contribution of {} to goal {}: {} -> {}",
            amount, goal_id, goal.current_amount, new_amount
        );
        self.goal_repo
            .update_current_amount(user_id, goal_id, new_amount)
            .await?
            .ok_or_else(goal_not_found)
    }
}
