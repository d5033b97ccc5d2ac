//! Database model for user settings.

use diesel::prelude::*;

/// One key/value pair owned by a user
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::user_settings)]
pub struct UserSettingDB {
    pub user_id: String,
    pub setting_key: String,
    pub setting_value: String,
}
