use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::{NewSnapshotDB, SnapshotDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{holdings, portfolio_history};
use fintrack_core::portfolio::{PortfolioRepositoryTrait, PortfolioSnapshot, PriceUpdate};
use fintrack_core::Result;

pub struct PortfolioRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PortfolioRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PortfolioRepository { pool, writer }
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    fn history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolio_history::table
            .filter(portfolio_history::user_id.eq(user_id))
            .order(portfolio_history::date.asc())
            .select(SnapshotDB::as_select())
            .load::<SnapshotDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| PortfolioSnapshot::try_from(row).map_err(Into::into))
            .collect()
    }

    async fn record_price_refresh(
        &self,
        user_id: &str,
        updates: Vec<PriceUpdate>,
        snapshot: PortfolioSnapshot,
    ) -> Result<()> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                for update in &updates {
                    diesel::update(
                        holdings::table
                            .filter(holdings::id.eq(&update.holding_id))
                            .filter(holdings::user_id.eq(&user_id)),
                    )
                    .set(holdings::current_price.eq(update.current_price.to_string()))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                }

                let new_row = NewSnapshotDB::new(&user_id, &snapshot);
                diesel::insert_into(portfolio_history::table)
                    .values(&new_row)
                    .on_conflict((portfolio_history::user_id, portfolio_history::date))
                    .do_update()
                    .set(portfolio_history::value.eq(&new_row.value))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                debug!(
                    "Stored {} prices and snapshot {} for {}",
                    updates.len(),
                    new_row.date,
                    user_id
                );
                Ok(())
            })
            .await
    }
}
