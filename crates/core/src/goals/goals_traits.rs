use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalProgress, GoalRecord, GoalUpdate, NewGoal};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Goals of a user in creation order.
    fn list(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get(&self, user_id: &str, goal_id: &str) -> Result<Option<Goal>>;
    async fn insert(&self, user_id: &str, record: GoalRecord) -> Result<Goal>;
    async fn update(&self, user_id: &str, goal_id: &str, record: GoalRecord)
        -> Result<Option<Goal>>;
    async fn update_current_amount(
        &self,
        user_id: &str,
        goal_id: &str,
        current_amount: Decimal,
    ) -> Result<Option<Goal>>;
    async fn delete(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_goal_progress(&self, user_id: &str) -> Result<Vec<GoalProgress>>;
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, user_id: &str, goal_id: &str, update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<String>;
    /// Adds `amount` to the goal, capped at its target amount.
    async fn contribute(&self, user_id: &str, goal_id: &str, amount: Decimal) -> Result<Goal>;
}
