use log::debug;
use std::sync::Arc;

use super::dashboard_model::{DashboardOverview, InvestmentOverview};
use crate::budgets::BudgetServiceTrait;
use crate::constants::RECENT_EXPENSES_LIMIT;
use crate::errors::Result;
use crate::expenses::ExpenseServiceTrait;
use crate::goals::GoalServiceTrait;
use crate::investments::HoldingServiceTrait;
use crate::portfolio::PortfolioServiceTrait;

pub trait DashboardServiceTrait: Send + Sync {
    fn get_overview(&self, user_id: &str) -> Result<DashboardOverview>;
}

pub struct DashboardService {
    budget_service: Arc<dyn BudgetServiceTrait>,
    expense_service: Arc<dyn ExpenseServiceTrait>,
    holding_service: Arc<dyn HoldingServiceTrait>,
    portfolio_service: Arc<dyn PortfolioServiceTrait>,
    goal_service: Arc<dyn GoalServiceTrait>,
}

impl DashboardService {
    pub fn new(
        budget_service: Arc<dyn BudgetServiceTrait>,
        expense_service: Arc<dyn ExpenseServiceTrait>,
        holding_service: Arc<dyn HoldingServiceTrait>,
        portfolio_service: Arc<dyn PortfolioServiceTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
    ) -> Self {
        DashboardService {
            budget_service,
            expense_service,
            holding_service,
            portfolio_service,
            goal_service,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_overview(&self, user_id: &str) -> Result<DashboardOverview> {
        debug!("Building dashboard for user {}", user_id);
        let budget = self.budget_service.get_overview(user_id, None)?;
        let recent_expenses = self
            .expense_service
            .get_recent_expenses(user_id, RECENT_EXPENSES_LIMIT)?;
        let investments = InvestmentOverview::new(
            self.holding_service.get_summary(user_id)?,
            self.portfolio_service.get_history(user_id)?,
        );
        let goals = self.goal_service.get_goal_progress(user_id)?;
        Ok(DashboardOverview {
            budget,
            recent_expenses,
            investments,
            goals,
        })
    }
}
