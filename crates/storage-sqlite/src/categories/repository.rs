use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{CategoryDB, NewCategoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::categories;
use fintrack_core::categories::{Category, CategoryRepositoryTrait};
use fintrack_core::Result;

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CategoryRepository { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn list(&self, user_id: &str) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = categories::table
            .filter(categories::user_id.eq(user_id))
            .order(categories::name.asc())
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    fn find_by_name(&self, user_id: &str, name: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let row = categories::table
            .filter(categories::user_id.eq(user_id))
            .filter(categories::name.eq(name))
            .select(CategoryDB::as_select())
            .first::<CategoryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Category::from))
    }

    async fn insert(&self, user_id: &str, name: &str) -> Result<Category> {
        let new_row = NewCategoryDB::new(user_id, name);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let row = diesel::insert_into(categories::table)
                    .values(&new_row)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Category::from(row))
            })
            .await
    }

    async fn insert_missing(&self, user_id: &str, names: Vec<String>) -> Result<usize> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut inserted = 0;
                for name in &names {
                    inserted += diesel::insert_or_ignore_into(categories::table)
                        .values(&NewCategoryDB::new(&user_id, name))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(inserted)
            })
            .await
    }

    async fn delete(&self, user_id: &str, category_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let category_id = category_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    categories::table
                        .filter(categories::id.eq(&category_id))
                        .filter(categories::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(deleted)
            })
            .await
    }
}
