//! Database models for goals.

use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::{format_date, new_id, now_timestamp, parse_date, parse_decimal};
use fintrack_core::goals::{Goal, GoalRecord};

/// Database model for goals
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: Option<String>,
    pub created_at: String,
}

/// Database model for creating a new goal
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: Option<String>,
    pub created_at: String,
}

/// Editable goal columns. `target_date` is always written so it can be cleared.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(treat_none_as_null = true)]
pub struct GoalChangesetDB {
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: Option<String>,
}

impl NewGoalDB {
    pub fn new(user_id: &str, record: GoalRecord) -> Self {
        NewGoalDB {
            id: new_id(),
            user_id: user_id.to_string(),
            name: record.name,
            target_amount: record.target_amount.to_string(),
            current_amount: record.current_amount.to_string(),
            target_date: record.target_date.map(format_date),
            created_at: now_timestamp(),
        }
    }
}

impl From<GoalRecord> for GoalChangesetDB {
    fn from(record: GoalRecord) -> Self {
        GoalChangesetDB {
            name: record.name,
            target_amount: record.target_amount.to_string(),
            current_amount: record.current_amount.to_string(),
            target_date: record.target_date.map(format_date),
        }
    }
}

impl TryFrom<GoalDB> for Goal {
    type Error = StorageError;

    fn try_from(db: GoalDB) -> Result<Self, Self::Error> {
        Ok(Goal {
            target_amount: parse_decimal("goals.target_amount", &db.target_amount)?,
            current_amount: parse_decimal("goals.current_amount", &db.current_amount)?,
            target_date: db
                .target_date
                .as_deref()
                .map(|d| parse_date("goals.target_date", d))
                .transpose()?,
            id: db.id,
            name: db.name,
        })
    }
}
