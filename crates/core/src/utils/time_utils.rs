use chrono::{Months, NaiveDate, Utc};

use crate::errors::{Error, Result};

/// Current calendar date in UTC. Portfolio snapshots are keyed by this date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current month as `YYYY-MM`.
pub fn current_month() -> String {
    today_utc().format("%Y-%m").to_string()
}

/// Parses a `YYYY-MM` month and returns its first and last day (inclusive).
pub fn month_bounds(month: &str) -> Result<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
        .map_err(|_| Error::invalid_input(format!("Invalid month '{}', expected YYYY-MM", month)))?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| Error::invalid_input(format!("Month '{}' is out of range", month)))?;
    Ok((first, last))
}
