//! In-memory repositories shared by the service unit tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::DemoAccount;
use crate::budgets::{Budget, BudgetRepositoryTrait};
use crate::categories::{Category, CategoryRepositoryTrait, CategoryService};
use crate::errors::{DatabaseError, Error, Result};
use crate::expenses::{Expense, ExpenseFilter, ExpenseRecord, ExpenseRepositoryTrait, ExpenseService};
use crate::goals::{Goal, GoalRecord, GoalRepositoryTrait};
use crate::investments::{Holding, HoldingRecord, HoldingRepositoryTrait};
use crate::portfolio::{PortfolioRepositoryTrait, PortfolioSnapshot, PriceSource, PriceUpdate};
use crate::settings::{SettingsRepositoryTrait, SettingsService};

pub const USER: &str = "user-1";
pub const OTHER_USER: &str = "user-2";

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn demo_account() -> DemoAccount {
    DemoAccount {
        user_id: "demo-user".to_string(),
        email: "test@example.com".to_string(),
        password: "password".to_string(),
        full_name: "Alex Jordan".to_string(),
    }
}

#[derive(Clone)]
struct Owned<T> {
    user_id: String,
    seq: u64,
    row: T,
}

#[derive(Clone)]
struct StoredExpense {
    date: NaiveDate,
    description: String,
    category_id: String,
    amount: Decimal,
}

#[derive(Clone)]
struct StoredBudget {
    category_id: String,
    budgeted: Decimal,
}

/// One store implementing every repository trait, with the same ownership
/// and constraint rules as the SQLite schema.
#[derive(Default)]
pub struct InMemoryStore {
    seq: RwLock<u64>,
    categories: RwLock<HashMap<String, Owned<String>>>,
    expenses: RwLock<HashMap<String, Owned<StoredExpense>>>,
    budgets: RwLock<HashMap<String, Owned<StoredBudget>>>,
    goals: RwLock<HashMap<String, Owned<Goal>>>,
    holdings: RwLock<HashMap<String, Owned<Holding>>>,
    history: RwLock<HashMap<(String, NaiveDate), Decimal>>,
    settings: RwLock<HashMap<(String, String), String>>,
    pub refresh_calls: RwLock<usize>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn next_id(&self, prefix: &str) -> (String, u64) {
        let mut seq = self.seq.write().unwrap();
        *seq += 1;
        (format!("{}-{}", prefix, *seq), *seq)
    }

    fn category_name(&self, category_id: &str) -> String {
        self.categories
            .read()
            .unwrap()
            .get(category_id)
            .map(|c| c.row.clone())
            .unwrap_or_default()
    }

    fn to_expense(&self, id: &str, stored: &StoredExpense) -> Expense {
        Expense {
            id: id.to_string(),
            date: stored.date,
            description: stored.description.clone(),
            category: self.category_name(&stored.category_id),
            amount: stored.amount,
        }
    }

    fn to_budget(&self, id: &str, stored: &StoredBudget) -> Budget {
        Budget {
            id: id.to_string(),
            category_id: stored.category_id.clone(),
            name: self.category_name(&stored.category_id),
            budgeted: stored.budgeted,
        }
    }

    fn sorted_rows<T: Clone>(
        table: &RwLock<HashMap<String, Owned<T>>>,
        user_id: &str,
    ) -> Vec<(String, Owned<T>)> {
        let mut rows: Vec<(String, Owned<T>)> = table
            .read()
            .unwrap()
            .iter()
            .filter(|(_, r)| r.user_id == user_id)
            .map(|(id, r)| (id.clone(), r.clone()))
            .collect();
        rows.sort_by_key(|(_, r)| r.seq);
        rows
    }

    fn delete_owned<T>(table: &RwLock<HashMap<String, Owned<T>>>, user_id: &str, id: &str) -> usize {
        let mut table = table.write().unwrap();
        match table.get(id) {
            Some(row) if row.user_id == user_id => {
                table.remove(id);
                1
            }
            _ => 0,
        }
    }

    pub fn seed_category(&self, user_id: &str, name: &str) -> Category {
        let (id, seq) = self.next_id("cat");
        self.categories.write().unwrap().insert(
            id.clone(),
            Owned {
                user_id: user_id.to_string(),
                seq,
                row: name.to_string(),
            },
        );
        Category {
            id,
            name: name.to_string(),
        }
    }

    pub fn seed_holding(&self, user_id: &str, ticker: &str, quantity: Decimal, price: Decimal) -> Holding {
        let (id, seq) = self.next_id("hold");
        let holding = Holding {
            id: id.clone(),
            name: format!("{} Inc.", ticker),
            ticker: ticker.to_string(),
            quantity,
            purchase_price: price,
            current_price: price,
            purchase_date: date("2023-01-15"),
        };
        self.holdings.write().unwrap().insert(
            id,
            Owned {
                user_id: user_id.to_string(),
                seq,
                row: holding.clone(),
            },
        );
        holding
    }

    pub fn seed_snapshot(&self, user_id: &str, day: NaiveDate, value: Decimal) {
        self.history
            .write()
            .unwrap()
            .insert((user_id.to_string(), day), value);
    }

    pub fn snapshot_count(&self, user_id: &str) -> usize {
        self.history
            .read()
            .unwrap()
            .keys()
            .filter(|(u, _)| u == user_id)
            .count()
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryStore {
    fn list(&self, user_id: &str) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = Self::sorted_rows(&self.categories, user_id)
            .into_iter()
            .map(|(id, r)| Category { id, name: r.row })
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    fn find_by_name(&self, user_id: &str, name: &str) -> Result<Option<Category>> {
        Ok(CategoryRepositoryTrait::list(self, user_id)?
            .into_iter()
            .find(|c| c.name == name))
    }

    async fn insert(&self, user_id: &str, name: &str) -> Result<Category> {
        if self.find_by_name(user_id, name)?.is_some() {
            return Err(Error::Database(DatabaseError::UniqueViolation(
                "categories.user_id, categories.name".to_string(),
            )));
        }
        Ok(self.seed_category(user_id, name))
    }

    async fn insert_missing(&self, user_id: &str, names: Vec<String>) -> Result<usize> {
        let mut inserted = 0;
        for name in names {
            if self.find_by_name(user_id, &name)?.is_none() {
                self.seed_category(user_id, &name);
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn delete(&self, user_id: &str, category_id: &str) -> Result<usize> {
        let referenced = self
            .expenses
            .read()
            .unwrap()
            .values()
            .any(|e| e.row.category_id == category_id);
        if referenced {
            return Err(Error::Database(DatabaseError::ForeignKeyViolation(
                "FOREIGN KEY constraint failed".to_string(),
            )));
        }
        let deleted = Self::delete_owned(&self.categories, user_id, category_id);
        if deleted > 0 {
            self.budgets
                .write()
                .unwrap()
                .retain(|_, b| b.row.category_id != category_id);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for InMemoryStore {
    fn list(&self, user_id: &str, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let mut rows: Vec<(u64, Expense)> = Self::sorted_rows(&self.expenses, user_id)
            .into_iter()
            .map(|(id, r)| (r.seq, self.to_expense(&id, &r.row)))
            .filter(|(_, e)| filter.matches(e))
            .collect();
        rows.sort_by(|(sa, a), (sb, b)| b.date.cmp(&a.date).then(sb.cmp(sa)));
        Ok(rows.into_iter().map(|(_, e)| e).collect())
    }

    fn recent(&self, user_id: &str, limit: i64) -> Result<Vec<Expense>> {
        let mut all = ExpenseRepositoryTrait::list(self, user_id, &ExpenseFilter::default())?;
        all.truncate(limit.max(0) as usize);
        Ok(all)
    }

    async fn insert(&self, user_id: &str, record: ExpenseRecord) -> Result<Expense> {
        let (id, seq) = self.next_id("exp");
        let stored = StoredExpense {
            date: record.date,
            description: record.description,
            category_id: record.category_id,
            amount: record.amount,
        };
        let expense = self.to_expense(&id, &stored);
        self.expenses.write().unwrap().insert(
            id,
            Owned {
                user_id: user_id.to_string(),
                seq,
                row: stored,
            },
        );
        Ok(expense)
    }

    async fn update(
        &self,
        user_id: &str,
        expense_id: &str,
        record: ExpenseRecord,
    ) -> Result<Option<Expense>> {
        let stored = {
            let mut table = self.expenses.write().unwrap();
            match table.get_mut(expense_id) {
                Some(row) if row.user_id == user_id => {
                    row.row = StoredExpense {
                        date: record.date,
                        description: record.description,
                        category_id: record.category_id,
                        amount: record.amount,
                    };
                    row.row.clone()
                }
                _ => return Ok(None),
            }
        };
        Ok(Some(self.to_expense(expense_id, &stored)))
    }

    async fn delete(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        Ok(Self::delete_owned(&self.expenses, user_id, expense_id))
    }
}

#[async_trait]
impl BudgetRepositoryTrait for InMemoryStore {
    fn list(&self, user_id: &str) -> Result<Vec<Budget>> {
        let mut budgets: Vec<Budget> = Self::sorted_rows(&self.budgets, user_id)
            .into_iter()
            .map(|(id, r)| self.to_budget(&id, &r.row))
            .collect();
        budgets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(budgets)
    }

    fn find_by_category(&self, user_id: &str, category_id: &str) -> Result<Option<Budget>> {
        Ok(BudgetRepositoryTrait::list(self, user_id)?
            .into_iter()
            .find(|b| b.category_id == category_id))
    }

    async fn insert(&self, user_id: &str, category_id: &str, budgeted: Decimal) -> Result<Budget> {
        let (id, seq) = self.next_id("bud");
        let stored = StoredBudget {
            category_id: category_id.to_string(),
            budgeted,
        };
        let budget = self.to_budget(&id, &stored);
        self.budgets.write().unwrap().insert(
            id,
            Owned {
                user_id: user_id.to_string(),
                seq,
                row: stored,
            },
        );
        Ok(budget)
    }

    async fn update(
        &self,
        user_id: &str,
        budget_id: &str,
        category_id: &str,
        budgeted: Decimal,
    ) -> Result<Option<Budget>> {
        let stored = {
            let mut table = self.budgets.write().unwrap();
            match table.get_mut(budget_id) {
                Some(row) if row.user_id == user_id => {
                    row.row = StoredBudget {
                        category_id: category_id.to_string(),
                        budgeted,
                    };
                    row.row.clone()
                }
                _ => return Ok(None),
            }
        };
        Ok(Some(self.to_budget(budget_id, &stored)))
    }

    async fn delete(&self, user_id: &str, budget_id: &str) -> Result<usize> {
        Ok(Self::delete_owned(&self.budgets, user_id, budget_id))
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryStore {
    fn list(&self, user_id: &str) -> Result<Vec<Goal>> {
        Ok(Self::sorted_rows(&self.goals, user_id)
            .into_iter()
            .map(|(_, r)| r.row)
            .collect())
    }

    fn get(&self, user_id: &str, goal_id: &str) -> Result<Option<Goal>> {
        Ok(self
            .goals
            .read()
            .unwrap()
            .get(goal_id)
            .filter(|r| r.user_id == user_id)
            .map(|r| r.row.clone()))
    }

    async fn insert(&self, user_id: &str, record: GoalRecord) -> Result<Goal> {
        let (id, seq) = self.next_id("goal");
        let goal = Goal {
            id: id.clone(),
            name: record.name,
            target_amount: record.target_amount,
            current_amount: record.current_amount,
            target_date: record.target_date,
        };
        self.goals.write().unwrap().insert(
            id,
            Owned {
                user_id: user_id.to_string(),
                seq,
                row: goal.clone(),
            },
        );
        Ok(goal)
    }

    async fn update(
        &self,
        user_id: &str,
        goal_id: &str,
        record: GoalRecord,
    ) -> Result<Option<Goal>> {
        let mut table = self.goals.write().unwrap();
        Ok(match table.get_mut(goal_id) {
            Some(row) if row.user_id == user_id => {
                row.row = Goal {
                    id: goal_id.to_string(),
                    name: record.name,
                    target_amount: record.target_amount,
                    current_amount: record.current_amount,
                    target_date: record.target_date,
                };
                Some(row.row.clone())
            }
            _ => None,
        })
    }

    async fn update_current_amount(
        &self,
        user_id: &str,
        goal_id: &str,
        current_amount: Decimal,
    ) -> Result<Option<Goal>> {
        let mut table = self.goals.write().unwrap();
        Ok(match table.get_mut(goal_id) {
            Some(row) if row.user_id == user_id => {
                row.row.current_amount = current_amount;
                Some(row.row.clone())
            }
            _ => None,
        })
    }

    async fn delete(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        Ok(Self::delete_owned(&self.goals, user_id, goal_id))
    }
}

#[async_trait]
impl HoldingRepositoryTrait for InMemoryStore {
    fn list(&self, user_id: &str) -> Result<Vec<Holding>> {
        Ok(Self::sorted_rows(&self.holdings, user_id)
            .into_iter()
            .map(|(_, r)| r.row)
            .collect())
    }

    async fn insert(&self, user_id: &str, record: HoldingRecord) -> Result<Holding> {
        let (id, seq) = self.next_id("hold");
        let holding = Holding {
            id: id.clone(),
            name: record.name,
            ticker: record.ticker,
            quantity: record.quantity,
            purchase_price: record.purchase_price,
            current_price: record.current_price,
            purchase_date: record.purchase_date,
        };
        self.holdings.write().unwrap().insert(
            id,
            Owned {
                user_id: user_id.to_string(),
                seq,
                row: holding.clone(),
            },
        );
        Ok(holding)
    }

    async fn update(
        &self,
        user_id: &str,
        holding_id: &str,
        record: HoldingRecord,
    ) -> Result<Option<Holding>> {
        let mut table = self.holdings.write().unwrap();
        Ok(match table.get_mut(holding_id) {
            Some(row) if row.user_id == user_id => {
                row.row = Holding {
                    id: holding_id.to_string(),
                    name: record.name,
                    ticker: record.ticker,
                    quantity: record.quantity,
                    purchase_price: record.purchase_price,
                    current_price: record.current_price,
                    purchase_date: record.purchase_date,
                };
                Some(row.row.clone())
            }
            _ => None,
        })
    }

    async fn delete(&self, user_id: &str, holding_id: &str) -> Result<usize> {
        Ok(Self::delete_owned(&self.holdings, user_id, holding_id))
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for InMemoryStore {
    fn history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>> {
        let mut snapshots: Vec<PortfolioSnapshot> = self
            .history
            .read()
            .unwrap()
            .iter()
            .filter(|((u, _), _)| u == user_id)
            .map(|((_, day), value)| PortfolioSnapshot {
                date: *day,
                value: *value,
            })
            .collect();
        snapshots.sort_by_key(|s| s.date);
        Ok(snapshots)
    }

    async fn record_price_refresh(
        &self,
        user_id: &str,
        updates: Vec<PriceUpdate>,
        snapshot: PortfolioSnapshot,
    ) -> Result<()> {
        *self.refresh_calls.write().unwrap() += 1;
        {
            let mut table = self.holdings.write().unwrap();
            for update in updates {
                if let Some(row) = table.get_mut(&update.holding_id) {
                    if row.user_id == user_id {
                        row.row.current_price = update.current_price;
                    }
                }
            }
        }
        self.seed_snapshot(user_id, snapshot.date, snapshot.value);
        Ok(())
    }
}

#[async_trait]
impl SettingsRepositoryTrait for InMemoryStore {
    fn get_values(&self, user_id: &str) -> Result<Vec<(String, String)>> {
        let mut values: Vec<(String, String)> = self
            .settings
            .read()
            .unwrap()
            .iter()
            .filter(|((u, _), _)| u == user_id)
            .map(|((_, k), v)| (k.clone(), v.clone()))
            .collect();
        values.sort();
        Ok(values)
    }

    fn get_value(&self, user_id: &str, setting_key: &str) -> Result<Option<String>> {
        Ok(self
            .settings
            .read()
            .unwrap()
            .get(&(user_id.to_string(), setting_key.to_string()))
            .cloned())
    }

    async fn set_values(&self, user_id: &str, values: Vec<(String, String)>) -> Result<()> {
        let mut table = self.settings.write().unwrap();
        for (key, value) in values {
            table.insert((user_id.to_string(), key), value);
        }
        Ok(())
    }
}

/// Price source multiplying every price by a fixed factor.
pub struct FixedChangePriceSource(pub Decimal);

impl PriceSource for FixedChangePriceSource {
    fn next_price(&self, holding: &Holding) -> Decimal {
        crate::portfolio::SimulatedPriceSource::apply_change(holding.current_price, self.0)
    }
}

pub fn category_service(store: &Arc<InMemoryStore>) -> Arc<CategoryService> {
    Arc::new(CategoryService::new(store.clone()))
}

pub fn expense_service(store: &Arc<InMemoryStore>) -> Arc<ExpenseService> {
    Arc::new(ExpenseService::new(store.clone(), category_service(store)))
}

pub fn settings_service(store: &Arc<InMemoryStore>) -> Arc<SettingsService> {
    Arc::new(SettingsService::new(store.clone()))
}
