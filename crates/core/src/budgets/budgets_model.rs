//! Budget domain models.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::decimal_utils::{checked_percent, checked_sub, checked_sum};
use crate::utils::validation::{require_positive, require_text};

/// A stored budget line, joined with its category name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub budgeted: Decimal,
}

/// Input model for creating a budget line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub name: String,
    pub budgeted: Decimal,
}

pub type BudgetUpdate = NewBudget;

impl NewBudget {
    /// Returns the trimmed category name once the amounts check out.
    pub fn validated_name(&self) -> Result<String> {
        require_positive("budgeted", self.budgeted)?;
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeUpdate {
    pub total_income: Decimal,
}

/// A budget line with the month's spending applied
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudget {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub budgeted: Decimal,
    pub spent: Decimal,
    pub percent_used: u32,
    pub is_over_budget: bool,
}

impl CategoryBudget {
    pub fn new(budget: Budget, spent: Decimal) -> Self {
        let percent_used = if budget.budgeted > Decimal::ZERO {
            checked_percent(spent, budget.budgeted)
                .and_then(|p| {
                    p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                        .max(Decimal::ZERO)
                        .to_u32()
                })
                .unwrap_or(u32::MAX)
        } else {
            0
        };
        CategoryBudget {
            is_over_budget: spent > budget.budgeted,
            id: budget.id,
            category_id: budget.category_id,
            name: budget.name,
            budgeted: budget.budgeted,
            spent,
            percent_used,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub month: String,
    pub total_income: Decimal,
    pub total_budgeted: Decimal,
    pub total_spent: Decimal,
    /// Income not yet assigned to a category; negative when over-assigned.
    pub remaining_to_budget: Decimal,
    pub categories: Vec<CategoryBudget>,
}

impl BudgetOverview {
    pub fn new(
        month: String,
        total_income: Decimal,
        categories: Vec<CategoryBudget>,
    ) -> Result<Self> {
        let total_budgeted = checked_sum("total budgeted", categories.iter().map(|c| c.budgeted))?;
        let total_spent = checked_sum("total spent", categories.iter().map(|c| c.spent))?;
        Ok(BudgetOverview {
            month,
            total_income,
            total_budgeted,
            total_spent,
            remaining_to_budget: checked_sub("remaining to budget", total_income, total_budgeted)?,
            categories,
        })
    }
}
