use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::model::{GoalChangesetDB, GoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;
use fintrack_core::goals::{Goal, GoalRecord, GoalRepositoryTrait};
use fintrack_core::Result;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

fn find(conn: &mut SqliteConnection, user_id: &str, goal_id: &str) -> Result<Option<Goal>> {
    let row = goals::table
        .filter(goals::id.eq(goal_id))
        .filter(goals::user_id.eq(user_id))
        .select(GoalDB::as_select())
        .first::<GoalDB>(conn)
        .optional()
        .map_err(StorageError::from)?;
    Ok(row.map(Goal::try_from).transpose()?)
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn list(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = goals::table
            .filter(goals::user_id.eq(user_id))
            .order((goals::created_at.asc(), goals::id.asc()))
            .select(GoalDB::as_select())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| Goal::try_from(row).map_err(Into::into))
            .collect()
    }

    fn get(&self, user_id: &str, goal_id: &str) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        find(&mut conn, user_id, goal_id)
    }

    async fn insert(&self, user_id: &str, record: GoalRecord) -> Result<Goal> {
        let new_row = NewGoalDB::new(user_id, record);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let row = diesel::insert_into(goals::table)
                    .values(&new_row)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::try_from(row)?)
            })
            .await
    }

    async fn update(
        &self,
        user_id: &str,
        goal_id: &str,
        record: GoalRecord,
    ) -> Result<Option<Goal>> {
        let changes = GoalChangesetDB::from(record);
        let user_id = user_id.to_string();
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Goal>> {
                let row = diesel::update(
                    goals::table
                        .filter(goals::id.eq(&goal_id))
                        .filter(goals::user_id.eq(&user_id)),
                )
                .set(&changes)
                .returning(GoalDB::as_returning())
                .get_result(conn)
                .optional()
                .map_err(StorageError::from)?;
                Ok(row.map(Goal::try_from).transpose()?)
            })
            .await
    }

    async fn update_current_amount(
        &self,
        user_id: &str,
        goal_id: &str,
        current_amount: Decimal,
    ) -> Result<Option<Goal>> {
        let user_id = user_id.to_string();
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Goal>> {
                let row = diesel::update(
                    goals::table
                        .filter(goals::id.eq(&goal_id))
                        .filter(goals::user_id.eq(&user_id)),
                )
                .set(goals::current_amount.eq(current_amount.to_string()))
                .returning(GoalDB::as_returning())
                .get_result(conn)
                .optional()
                .map_err(StorageError::from)?;
                Ok(row.map(Goal::try_from).transpose()?)
            })
            .await
    }

    async fn delete(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    goals::table
                        .filter(goals::id.eq(&goal_id))
                        .filter(goals::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(deleted)
            })
            .await
    }
}
