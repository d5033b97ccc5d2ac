use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::{format_date, new_id, parse_date, parse_decimal};
use fintrack_core::portfolio::PortfolioSnapshot;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::portfolio_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnapshotDB {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub value: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::portfolio_history)]
pub struct NewSnapshotDB {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub value: String,
}

impl NewSnapshotDB {
    pub fn new(user_id: &str, snapshot: &PortfolioSnapshot) -> Self {
        NewSnapshotDB {
            id: new_id(),
            user_id: user_id.to_string(),
            date: format_date(snapshot.date),
            value: snapshot.value.to_string(),
        }
    }
}

impl TryFrom<SnapshotDB> for PortfolioSnapshot {
    type Error = StorageError;

    fn try_from(db: SnapshotDB) -> Result<Self, Self::Error> {
        Ok(PortfolioSnapshot {
            date: parse_date("portfolio_history.date", &db.date)?,
            value: parse_decimal("portfolio_history.value", &db.value)?,
        })
    }
}
