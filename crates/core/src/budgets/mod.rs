//! Budgets module - monthly spending limits per category.

mod budgets_model;
mod budgets_service;
mod budgets_traits;


pub use budgets_model::{
    Budget, BudgetOverview, BudgetUpdate, CategoryBudget, IncomeUpdate, NewBudget,
};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
