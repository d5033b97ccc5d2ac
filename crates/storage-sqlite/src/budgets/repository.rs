use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::model::{BudgetDB, NewBudgetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{budgets, categories};
use crate::utils::now_timestamp;
use fintrack_core::budgets::{Budget, BudgetRepositoryTrait};
use fintrack_core::Result;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

fn load_one(conn: &mut SqliteConnection, user_id: &str, budget_id: &str) -> Result<Option<Budget>> {
    let row = budgets::table
        .inner_join(categories::table)
        .filter(budgets::id.eq(budget_id))
        .filter(budgets::user_id.eq(user_id))
        .select((BudgetDB::as_select(), categories::name))
        .first::<(BudgetDB, String)>(conn)
        .optional()
        .map_err(StorageError::from)?;
    Ok(match row {
        Some((row, name)) => Some(row.into_domain(name)?),
        None => None,
    })
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn list(&self, user_id: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .inner_join(categories::table)
            .filter(budgets::user_id.eq(user_id))
            .order(categories::name.asc())
            .select((BudgetDB::as_select(), categories::name))
            .load::<(BudgetDB, String)>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|(row, name)| row.into_domain(name).map_err(Into::into))
            .collect()
    }

    fn find_by_category(&self, user_id: &str, category_id: &str) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let row = budgets::table
            .inner_join(categories::table)
            .filter(budgets::user_id.eq(user_id))
            .filter(budgets::category_id.eq(category_id))
            .select((BudgetDB::as_select(), categories::name))
            .first::<(BudgetDB, String)>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(match row {
            Some((row, name)) => Some(row.into_domain(name)?),
            None => None,
        })
    }

    async fn insert(&self, user_id: &str, category_id: &str, budgeted: Decimal) -> Result<Budget> {
        let new_row = NewBudgetDB::new(user_id, category_id, budgeted);
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                diesel::insert_into(budgets::table)
                    .values(&new_row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                load_one(conn, &user_id, &new_row.id)?.ok_or_else(|| {
                    StorageError::QueryFailed(diesel::result::Error::NotFound).into()
                })
            })
            .await
    }

    async fn update(
        &self,
        user_id: &str,
        budget_id: &str,
        category_id: &str,
        budgeted: Decimal,
    ) -> Result<Option<Budget>> {
        let user_id = user_id.to_string();
        let budget_id = budget_id.to_string();
        let category_id = category_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Budget>> {
                let updated = diesel::update(
                    budgets::table
                        .filter(budgets::id.eq(&budget_id))
                        .filter(budgets::user_id.eq(&user_id)),
                )
                .set((
                    budgets::category_id.eq(&category_id),
                    budgets::budgeted.eq(budgeted.to_string()),
                    budgets::updated_at.eq(now_timestamp()),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;
                if updated == 0 {
                    return Ok(None);
                }
                load_one(conn, &user_id, &budget_id)
            })
            .await
    }

    async fn delete(&self, user_id: &str, budget_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let budget_id = budget_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    budgets::table
                        .filter(budgets::id.eq(&budget_id))
                        .filter(budgets::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(deleted)
            })
            .await
    }
}
