//! Database models for holdings.

use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::{format_date, new_id, now_timestamp, parse_date, parse_decimal};
use fintrack_core::investments::{Holding, HoldingRecord};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub ticker: String,
    pub quantity: String,
    pub purchase_price: String,
    pub current_price: String,
    pub purchase_date: String,
    pub created_at: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
pub struct NewHoldingDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub ticker: String,
    pub quantity: String,
    pub purchase_price: String,
    pub current_price: String,
    pub purchase_date: String,
    pub created_at: String,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
pub struct HoldingChangesetDB {
    pub name: String,
    pub ticker: String,
    pub quantity: String,
    pub purchase_price: String,
    pub current_price: String,
    pub purchase_date: String,
}

impl NewHoldingDB {
    pub fn new(user_id: &str, record: HoldingRecord) -> Self {
        NewHoldingDB {
            id: new_id(),
            user_id: user_id.to_string(),
            name: record.name,
            ticker: record.ticker,
            quantity: record.quantity.to_string(),
            purchase_price: record.purchase_price.to_string(),
            current_price: record.current_price.to_string(),
            purchase_date: format_date(record.purchase_date),
            created_at: now_timestamp(),
        }
    }
}

impl From<HoldingRecord> for HoldingChangesetDB {
    fn from(record: HoldingRecord) -> Self {
        HoldingChangesetDB {
            name: record.name,
            ticker: record.ticker,
            quantity: record.quantity.to_string(),
            purchase_price: record.purchase_price.to_string(),
            current_price: record.current_price.to_string(),
            purchase_date: format_date(record.purchase_date),
        }
    }
}

impl TryFrom<HoldingDB> for Holding {
    type Error = StorageError;

    fn try_from(db: HoldingDB) -> Result<Self, Self::Error> {
        Ok(Holding {
            quantity: parse_decimal("holdings.quantity", &db.quantity)?,
            purchase_price: parse_decimal("holdings.purchase_price", &db.purchase_price)?,
            current_price: parse_decimal("holdings.current_price", &db.current_price)?,
            purchase_date: parse_date("holdings.purchase_date", &db.purchase_date)?,
            id: db.id,
            name: db.name,
            ticker: db.ticker,
        })
    }
}
