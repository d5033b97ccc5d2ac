use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::UserSettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_settings::dsl::*;
use fintrack_core::errors::Result;
use fintrack_core::settings::SettingsRepositoryTrait;

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_values(&self, owner: &str) -> Result<Vec<(String, String)>> {
        let mut conn = get_connection(&self.pool)?;
        let values = user_settings
            .filter(user_id.eq(owner))
            .order(setting_key.asc())
            .select((setting_key, setting_value))
            .load::<(String, String)>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(values)
    }

    fn get_value(&self, owner: &str, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value = user_settings
            .filter(user_id.eq(owner))
            .filter(setting_key.eq(key))
            .select(setting_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    async fn set_values(&self, owner: &str, values: Vec<(String, String)>) -> Result<()> {
        let rows: Vec<UserSettingDB> = values
            .into_iter()
            .map(|(key, value)| UserSettingDB {
                user_id: owner.to_string(),
                setting_key: key,
                setting_value: value,
            })
            .collect();
        self.writer
            .exec(move |conn| {
                for row in &rows {
                    diesel::replace_into(user_settings)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(())
            })
            .await
    }
}
