//! Conversions between domain values and their TEXT columns.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Creation timestamp with fixed width so rows sort by text order.
pub fn now_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(column: &'static str, value: &str) -> Result<NaiveDate, StorageError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| StorageError::InvalidValue {
        column,
        value: value.to_string(),
    })
}

pub fn parse_decimal(column: &'static str, value: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(value).map_err(|_| StorageError::InvalidValue {
        column,
        value: value.to_string(),
    })
}
