use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{HoldingChangesetDB, HoldingDB, NewHoldingDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::holdings;
use fintrack_core::investments::{Holding, HoldingRecord, HoldingRepositoryTrait};
use fintrack_core::Result;

pub struct HoldingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HoldingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        HoldingRepository { pool, writer }
    }
}

/// Holdings of a user in creation order.
pub(crate) fn load_holdings(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Holding>> {
    let rows = holdings::table
        .filter(holdings::user_id.eq(user_id))
        .order((holdings::created_at.asc(), holdings::id.asc()))
        .select(HoldingDB::as_select())
        .load::<HoldingDB>(conn)
        .map_err(StorageError::from)?;
    rows.into_iter()
        .map(|row| Holding::try_from(row).map_err(Into::into))
        .collect()
}

#[async_trait]
impl HoldingRepositoryTrait for HoldingRepository {
    fn list(&self, user_id: &str) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        load_holdings(&mut conn, user_id)
    }

    async fn insert(&self, user_id: &str, record: HoldingRecord) -> Result<Holding> {
        let new_row = NewHoldingDB::new(user_id, record);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Holding> {
                let row = diesel::insert_into(holdings::table)
                    .values(&new_row)
                    .returning(HoldingDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Holding::try_from(row)?)
            })
            .await
    }

    async fn update(
        &self,
        user_id: &str,
        holding_id: &str,
        record: HoldingRecord,
    ) -> Result<Option<Holding>> {
        let changes = HoldingChangesetDB::from(record);
        let user_id = user_id.to_string();
        let holding_id = holding_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Holding>> {
                let row = diesel::update(
                    holdings::table
                        .filter(holdings::id.eq(&holding_id))
                        .filter(holdings::user_id.eq(&user_id)),
                )
                .set(&changes)
                .returning(HoldingDB::as_returning())
                .get_result(conn)
                .optional()
                .map_err(StorageError::from)?;
                Ok(row.map(Holding::try_from).transpose()?)
            })
            .await
    }

    async fn delete(&self, user_id: &str, holding_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let holding_id = holding_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    holdings::table
                        .filter(holdings::id.eq(&holding_id))
                        .filter(holdings::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(deleted)
            })
            .await
    }
}
