//! Database models for expenses.

use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::{format_date, new_id, now_timestamp, parse_date, parse_decimal};
use fintrack_core::expenses::{Expense, ExpenseRecord};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub created_at: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewExpenseDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub created_at: String,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct ExpenseChangesetDB {
    pub category_id: String,
    pub date: String,
    pub description: String,
    pub amount: String,
}

impl NewExpenseDB {
    pub fn new(user_id: &str, record: ExpenseRecord) -> Self {
        NewExpenseDB {
            id: new_id(),
            user_id: user_id.to_string(),
            category_id: record.category_id,
            date: format_date(record.date),
            description: record.description,
            amount: record.amount.to_string(),
            created_at: now_timestamp(),
        }
    }
}

impl From<ExpenseRecord> for ExpenseChangesetDB {
    fn from(record: ExpenseRecord) -> Self {
        ExpenseChangesetDB {
            category_id: record.category_id,
            date: format_date(record.date),
            description: record.description,
            amount: record.amount.to_string(),
        }
    }
}

impl ExpenseDB {
    /// Builds the domain expense; `category_name` comes from the joined category.
    pub fn into_domain(self, category_name: String) -> Result<Expense, StorageError> {
        Ok(Expense {
            date: parse_date("transactions.date", &self.date)?,
            amount: parse_decimal("transactions.amount", &self.amount)?,
            id: self.id,
            description: self.description,
            category: category_name,
        })
    }
}
