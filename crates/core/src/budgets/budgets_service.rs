use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::budgets_model::{Budget, BudgetOverview, BudgetUpdate, CategoryBudget, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::categories::CategoryServiceTrait;
use crate::errors::{DatabaseError, Error, Result};
use crate::expenses::ExpenseServiceTrait;
use crate::settings::SettingsServiceTrait;
use crate::utils::time_utils::{current_month, month_bounds};

pub struct BudgetService {
    budget_repo: Arc<dyn BudgetRepositoryTrait>,
    category_service: Arc<dyn CategoryServiceTrait>,
    expense_service: Arc<dyn ExpenseServiceTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
}

impl BudgetService {
    pub fn new(
        budget_repo: Arc<dyn BudgetRepositoryTrait>,
        category_service: Arc<dyn CategoryServiceTrait>,
        expense_service: Arc<dyn ExpenseServiceTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
    ) -> Self {
        BudgetService {
            budget_repo,
            category_service,
            expense_service,
            settings_service,
        }
    }

    fn duplicate(name: &str) -> Error {
        Error::ConstraintViolation(format!("A budget for '{}' already exists", name))
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_overview(&self, user_id: &str, month: Option<&str>) -> Result<BudgetOverview> {
        let month = match month.map(str::trim).filter(|m| !m.is_empty()) {
            Some(m) => m.to_string(),
            None => current_month(),
        };
        let (start, end) = month_bounds(&month)?;
        let spending = self
            .expense_service
            .get_spending_by_category(user_id, start, end)?;
        let categories = self
            .budget_repo
            .list(user_id)?
            .into_iter()
            .map(|budget| {
                let spent = spending.get(&budget.name).copied().unwrap_or(Decimal::ZERO);
                CategoryBudget::new(budget, spent)
            })
            .collect();
        let income = self.settings_service.get_monthly_income(user_id)?;
        BudgetOverview::new(month, income, categories)
    }

    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget> {
        let name = new_budget.validated_name()?;
        let category = self.category_service.ensure_category(user_id, &name).await?;
        if self
            .budget_repo
            .find_by_category(user_id, &category.id)?
            .is_some()
        {
            return Err(Self::duplicate(&name));
        }
        debug!("Creating budget for '{}' ({})", name, new_budget.budgeted);
        self.budget_repo
            .insert(user_id, &category.id, new_budget.budgeted)
            .await
            .map_err(|e| match e {
                Error::Database(DatabaseError::UniqueViolation(_)) => Self::duplicate(&name),
                other => other,
            })
    }

    async fn update_budget(
        &self,
        user_id: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Budget> {
        let name = update.validated_name()?;
        if !self
            .budget_repo
            .list(user_id)?
            .iter()
            .any(|budget| budget.id == budget_id)
        {
            return Err(Error::NotFound("Budget".to_string()));
        }
        let category = self.category_service.ensure_category(user_id, &name).await?;
        if let Some(existing) = self.budget_repo.find_by_category(user_id, &category.id)? {
            if existing.id != budget_id {
                return Err(Self::duplicate(&name));
            }
        }
        self.budget_repo
            .update(user_id, budget_id, &category.id, update.budgeted)
            .await
            .map_err(|e| match e {
                Error::Database(DatabaseError::UniqueViolation(_)) => Self::duplicate(&name),
                other => other,
            })?
            .ok_or_else(|| Error::NotFound("Budget".to_string()))
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<String> {
        if self.budget_repo.delete(user_id, budget_id).await? == 0 {
            return Err(Error::NotFound("Budget".to_string()));
        }
        Ok(budget_id.to_string())
    }

    async fn set_income(&self, user_id: &str, amount: Decimal) -> Result<Decimal> {
        self.settings_service.set_monthly_income(user_id, amount).await
    }
}
