use crate::budgets::budgets_model::{Budget, BudgetOverview, BudgetUpdate, NewBudget};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Budget lines of a user sorted by category name.
    fn list(&self, user_id: &str) -> Result<Vec<Budget>>;
    fn find_by_category(&self, user_id: &str, category_id: &str) -> Result<Option<Budget>>;
    async fn insert(&self, user_id: &str, category_id: &str, budgeted: Decimal) -> Result<Budget>;
    async fn update(
        &self,
        user_id: &str,
        budget_id: &str,
        category_id: &str,
        budgeted: Decimal,
    ) -> Result<Option<Budget>>;
    async fn delete(&self, user_id: &str, budget_id: &str) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Budget lines with spending for `month` (`YYYY-MM`, current UTC month when `None`).
    fn get_overview(&self, user_id: &str, month: Option<&str>) -> Result<BudgetOverview>;
    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget>;
    async fn update_budget(
        &self,
        user_id: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Budget>;
    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<String>;
    async fn set_income(&self, user_id: &str, amount: Decimal) -> Result<Decimal>;
}
