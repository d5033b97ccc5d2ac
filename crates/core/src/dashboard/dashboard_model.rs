use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::BudgetOverview;
use crate::expenses::Expense;
use crate::goals::GoalProgress;
use crate::investments::PortfolioSummary;
use crate::portfolio::PortfolioSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentOverview {
    pub total_value: Decimal,
    pub total_cost_basis: Decimal,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percent: Decimal,
    pub history: Vec<PortfolioSnapshot>,
}

impl InvestmentOverview {
    pub fn new(summary: PortfolioSummary, history: Vec<PortfolioSnapshot>) -> Self {
        InvestmentOverview {
            total_value: summary.total_value,
            total_cost_basis: summary.total_cost_basis,
            total_gain_loss: summary.total_gain_loss,
            total_gain_loss_percent: summary.total_gain_loss_percent,
            history,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub budget: BudgetOverview,
    pub recent_expenses: Vec<Expense>,
    pub investments: InvestmentOverview,
    pub goals: Vec<GoalProgress>,
}
