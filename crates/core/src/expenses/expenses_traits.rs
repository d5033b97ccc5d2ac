use std::collections::HashMap;

use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseFilter, ExpenseRecord, ExpenseUpdate, NewExpense};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Expenses matching `filter`, newest date first.
    fn list(&self, user_id: &str, filter: &ExpenseFilter) -> Result<Vec<Expense>>;
    fn recent(&self, user_id: &str, limit: i64) -> Result<Vec<Expense>>;
    async fn insert(&self, user_id: &str, record: ExpenseRecord) -> Result<Expense>;
    /// Returns `None` when no expense with this id belongs to the user.
    async fn update(
        &self,
        user_id: &str,
        expense_id: &str,
        record: ExpenseRecord,
    ) -> Result<Option<Expense>>;
    async fn delete(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self, user_id: &str, filter: ExpenseFilter) -> Result<Vec<Expense>>;
    fn get_recent_expenses(&self, user_id: &str, limit: i64) -> Result<Vec<Expense>>;
    /// Total spent per category name within an inclusive date range.
    fn get_spending_by_category(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, Decimal>>;
    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense>;
    /// Deletes the expense and returns its id.
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<String>;
}
