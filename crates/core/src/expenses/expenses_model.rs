//! Expense domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::ALL_CATEGORIES;
use crate::errors::Result;
use crate::utils::validation::{require_positive, require_text};

/// Domain model representing a single expense. `category` carries the category name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
}

/// Input model for creating a new expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        require_text("description", &self.description)?;
        require_text("category", &self.category)?;
        require_positive("amount", self.amount)?;
        Ok(())
    }
}

/// Input model for replacing an existing expense
pub type ExpenseUpdate = NewExpense;

/// Expense fields with the category already resolved to its id.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub description: String,
    pub category_id: String,
    pub amount: Decimal,
}

/// Optional filters applied when listing expenses. Date bounds are inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ExpenseFilter {
    pub fn between(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        ExpenseFilter {
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Default::default()
        }
    }

    /// Drops blank text filters and the "All Categories" pseudo-category.
    pub fn normalized(self) -> Self {
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && c != ALL_CATEGORIES);
        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        ExpenseFilter {
            start_date: self.start_date,
            end_date: self.end_date,
            category,
            search,
        }
    }

    /// In-memory equivalent of the storage filter.
    pub fn matches(&self, expense: &Expense) -> bool {
        if self.start_date.is_some_and(|start| expense.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| expense.date > end) {
            return false;
        }
        if let Some(ref category) = self.category {
            if &expense.category != category {
                return false;
            }
        }
        self.matches_search(&expense.description)
    }

    /// Case-insensitive substring match on the description, Unicode aware.
    pub fn matches_search(&self, description: &str) -> bool {
        match self.search {
            Some(ref search) => description
                .to_lowercase()
                .contains(&search.to_lowercase()),
            None => true,
        }
    }
}
