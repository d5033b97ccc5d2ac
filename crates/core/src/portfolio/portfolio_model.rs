//! Portfolio history domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::investments::Holding;
use crate::utils::decimal_utils::checked_sum;

/// Total market value of a user's holdings on one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// New current price for one holding
#[derive(Debug, Clone, PartialEq)]
pub struct PriceUpdate {
    pub holding_id: String,
    pub current_price: Decimal,
}

/// Outcome of a price refresh: the repriced holdings and today's snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResult {
    pub holdings: Vec<Holding>,
    pub history: PortfolioSnapshot,
}

/// Sum of `quantity * current_price` over all holdings.
pub fn total_market_value(holdings: &[Holding]) -> Result<Decimal> {
    let values = holdings
        .iter()
        .map(Holding::market_value)
        .collect::<Result<Vec<_>>>()?;
    checked_sum("portfolio value", values)
}
