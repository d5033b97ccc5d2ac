//! Database models for budgets.

use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::errors::StorageError;
use crate::utils::{new_id, now_timestamp, parse_decimal};
use fintrack_core::budgets::Budget;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub budgeted: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
pub struct NewBudgetDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub budgeted: String,
    pub created_at: String,
    pub updated_at: String,
}

impl NewBudgetDB {
    pub fn new(user_id: &str, category_id: &str, budgeted: Decimal) -> Self {
        let now = now_timestamp();
        NewBudgetDB {
            id: new_id(),
            user_id: user_id.to_string(),
            category_id: category_id.to_string(),
            budgeted: budgeted.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl BudgetDB {
    pub fn into_domain(self, category_name: String) -> Result<Budget, StorageError> {
        Ok(Budget {
            budgeted: parse_decimal("budgets.budgeted", &self.budgeted)?,
            id: self.id,
            category_id: self.category_id,
            name: category_name,
        })
    }
}
