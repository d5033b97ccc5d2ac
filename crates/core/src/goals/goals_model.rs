//! Goals domain models.

use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::decimal_utils::checked_percent;
use crate::utils::validation::{require_non_negative, require_positive, require_text};

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
}

impl Goal {
    /// Amount saved after contributing `amount`.
    ///
    /// The result is capped at the target and never drops below the amount
    /// already saved, even for goals edited to sit above their target.
    pub fn amount_after_contribution(&self, amount: Decimal) -> Decimal {
        self.current_amount
            .saturating_add(amount)
            .min(self.target_amount)
            .max(self.current_amount)
    }

    /// Whole-number completion percentage, capped at 100.
    pub fn progress_percent(&self) -> u32 {
        if self.target_amount <= Decimal::ZERO {
            return 0;
        }
        let percent = checked_percent(self.current_amount, self.target_amount)
            .unwrap_or(dec!(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .min(dec!(100))
            .max(Decimal::ZERO);
        percent.to_u32().unwrap_or(0)
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Option<Decimal>,
    pub target_date: Option<NaiveDate>,
}

impl NewGoal {
    pub fn into_record(self) -> Result<GoalRecord> {
        GoalRecord {
            name: self.name,
            target_amount: self.target_amount,
            current_amount: self.current_amount.unwrap_or(Decimal::ZERO),
            target_date: self.target_date,
        }
        .validated()
    }
}

/// Input model for replacing an existing goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
}

impl GoalUpdate {
    pub fn into_record(self) -> Result<GoalRecord> {
        GoalRecord {
            name: self.name,
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            target_date: self.target_date,
        }
        .validated()
    }
}

/// Goal fields as written to storage
#[derive(Debug, Clone, PartialEq)]
pub struct GoalRecord {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
}

impl GoalRecord {
    fn validated(self) -> Result<Self> {
        let name = require_text("name", &self.name)?;
        require_positive("targetAmount", self.target_amount)?;
        require_non_negative("currentAmount", self.current_amount)?;
        Ok(GoalRecord { name, ..self })
    }
}

/// Request body for a contribution
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub amount: Decimal,
}

/// Goal with its completion percentage, as shown on the dashboard
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub progress_percent: u32,
}

impl From<&Goal> for GoalProgress {
    fn from(goal: &Goal) -> Self {
        GoalProgress {
            id: goal.id.clone(),
            name: goal.name.clone(),
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            progress_percent: goal.progress_percent(),
        }
    }
}
