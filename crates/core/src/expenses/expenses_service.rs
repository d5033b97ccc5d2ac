use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::expenses_model::{Expense, ExpenseFilter, ExpenseRecord, ExpenseUpdate, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::categories::CategoryServiceTrait;
use crate::errors::{Error, Result};
use crate::utils::decimal_utils::overflow;

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
    category_service: Arc<dyn CategoryServiceTrait>,
}

impl ExpenseService {
    pub fn new(
        repository: Arc<dyn ExpenseRepositoryTrait>,
        category_service: Arc<dyn CategoryServiceTrait>,
    ) -> Self {
        ExpenseService {
            repository,
            category_service,
        }
    }

    fn to_record(&self, user_id: &str, input: NewExpense) -> Result<ExpenseRecord> {
        input.validate()?;
        let category = self.category_service.resolve_category(user_id, &input.category)?;
        Ok(ExpenseRecord {
            date: input.date,
            description: input.description.trim().to_string(),
            category_id: category.id,
            amount: input.amount,
        })
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self, user_id: &str, filter: ExpenseFilter) -> Result<Vec<Expense>> {
        self.repository.list(user_id, &filter.normalized())
    }

    fn get_recent_expenses(&self, user_id: &str, limit: i64) -> Result<Vec<Expense>> {
        self.repository.recent(user_id, limit)
    }

    fn get_spending_by_category(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, Decimal>> {
        let expenses = self
            .repository
            .list(user_id, &ExpenseFilter::between(start, end))?;
        let mut totals: HashMap<String, Decimal> = HashMap::new();
        for expense in expenses {
            let total = totals.entry(expense.category).or_insert(Decimal::ZERO);
            *total = total
                .checked_add(expense.amount)
                .ok_or_else(|| overflow("category spending"))?;
        }
        Ok(totals)
    }

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let record = self.to_record(user_id, new_expense)?;
        debug!("Creating expense for user {} on {}", user_id, record.date);
        self.repository.insert(user_id, record).await
    }

    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense> {
        let record = self.to_record(user_id, update)?;
        self.repository
            .update(user_id, expense_id, record)
            .await?
            .ok_or_else(|| Error::NotFound("Expense".to_string()))
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<String> {
        let deleted = self.repository.delete(user_id, expense_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound("Expense".to_string()));
        }
        Ok(expense_id.to_string())
    }
}
