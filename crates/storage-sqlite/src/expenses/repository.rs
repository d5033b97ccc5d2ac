use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{ExpenseChangesetDB, ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, transactions};
use crate::utils::format_date;
use fintrack_core::expenses::{Expense, ExpenseFilter, ExpenseRecord, ExpenseRepositoryTrait};
use fintrack_core::Result;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }
}

fn to_domain(rows: Vec<(ExpenseDB, String)>) -> Result<Vec<Expense>> {
    rows.into_iter()
        .map(|(row, name)| row.into_domain(name).map_err(Into::into))
        .collect()
}

fn load_one(conn: &mut SqliteConnection, user_id: &str, expense_id: &str) -> Result<Option<Expense>> {
    let row = transactions::table
        .inner_join(categories::table)
        .filter(transactions::id.eq(expense_id))
        .filter(transactions::user_id.eq(user_id))
        .select((ExpenseDB::as_select(), categories::name))
        .first::<(ExpenseDB, String)>(conn)
        .optional()
        .map_err(StorageError::from)?;
    Ok(match row {
        Some((row, name)) => Some(row.into_domain(name)?),
        None => None,
    })
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn list(&self, user_id: &str, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = transactions::table
            .inner_join(categories::table)
            .filter(transactions::user_id.eq(user_id.to_string()))
            .select((ExpenseDB::as_select(), categories::name))
            .into_boxed();

        if let Some(start) = filter.start_date {
            query = query.filter(transactions::date.ge(format_date(start)));
        }
        if let Some(end) = filter.end_date {
            query = query.filter(transactions::date.le(format_date(end)));
        }
        if let Some(ref category) = filter.category {
            query = query.filter(categories::name.eq(category.clone()));
        }

        let rows = query
            .order((
                transactions::date.desc(),
                transactions::created_at.desc(),
                transactions::id.desc(),
            ))
            .load::<(ExpenseDB, String)>(&mut conn)
            .map_err(StorageError::from)?;
        // SQLite LIKE only folds ASCII, so the search runs here.
        let mut expenses = to_domain(rows)?;
        expenses.retain(|e| filter.matches_search(&e.description));
        Ok(expenses)
    }

    fn recent(&self, user_id: &str, limit: i64) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .inner_join(categories::table)
            .filter(transactions::user_id.eq(user_id))
            .select((ExpenseDB::as_select(), categories::name))
            .order((
                transactions::date.desc(),
                transactions::created_at.desc(),
                transactions::id.desc(),
            ))
            .limit(limit)
            .load::<(ExpenseDB, String)>(&mut conn)
            .map_err(StorageError::from)?;
        to_domain(rows)
    }

    async fn insert(&self, user_id: &str, record: ExpenseRecord) -> Result<Expense> {
        let new_row = NewExpenseDB::new(user_id, record);
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                diesel::insert_into(transactions::table)
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
        expense_id: &str,
        record: ExpenseRecord,
    ) -> Result<Option<Expense>> {
        let changes = ExpenseChangesetDB::from(record);
        let user_id = user_id.to_string();
        let expense_id = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Expense>> {
                let updated = diesel::update(
                    transactions::table
                        .filter(transactions::id.eq(&expense_id))
                        .filter(transactions::user_id.eq(&user_id)),
                )
                .set(&changes)
                .execute(conn)
                .map_err(StorageError::from)?;
                if updated == 0 {
                    return Ok(None);
                }
                load_one(conn, &user_id, &expense_id)
            })
            .await
    }

    async fn delete(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let expense_id = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    transactions::table
                        .filter(transactions::id.eq(&expense_id))
                        .filter(transactions::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(deleted)
            })
            .await
    }
}
