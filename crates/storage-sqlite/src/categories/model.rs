//! Database models for categories.

use diesel::prelude::*;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategoryDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: String,
}

impl NewCategoryDB {
    pub fn new(user_id: &str, name: &str) -> Self {
        NewCategoryDB {
            id: crate::utils::new_id(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            created_at: crate::utils::now_timestamp(),
        }
    }
}

impl From<CategoryDB> for fintrack_core::categories::Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
        }
    }
}
