//! Holding domain models.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::utils::decimal_utils::{checked_mul, checked_percent, checked_sub, checked_sum, overflow};
use crate::utils::validation::{require_positive, require_text};

/// Domain model representing an investment position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub purchase_date: NaiveDate,
}

impl Holding {
    pub fn market_value(&self) -> Result<Decimal> {
        checked_mul("market value", self.quantity, self.current_price)
    }

    pub fn cost_basis(&self) -> Result<Decimal> {
        checked_mul("cost basis", self.quantity, self.purchase_price)
    }
}

/// Input model for creating a holding
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub name: String,
    pub ticker: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub purchase_date: NaiveDate,
}

/// Input model for replacing a holding
pub type HoldingUpdate = NewHolding;

impl NewHolding {
    pub fn into_record(self) -> Result<HoldingRecord> {
        Ok(HoldingRecord {
            name: require_text("name", &self.name)?,
            ticker: require_text("ticker", &self.ticker)?.to_uppercase(),
            quantity: require_positive("quantity", self.quantity)?,
            purchase_price: require_positive("purchasePrice", self.purchase_price)?,
            current_price: require_positive("currentPrice", self.current_price)?,
            purchase_date: self.purchase_date,
        })
    }
}

/// Holding fields as written to storage
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingRecord {
    pub name: String,
    pub ticker: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub purchase_date: NaiveDate,
}

/// Valuation of a single holding
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingPerformance {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub market_value: Decimal,
    pub cost_basis: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
}

impl TryFrom<&Holding> for HoldingPerformance {
    type Error = Error;

    fn try_from(holding: &Holding) -> Result<Self> {
        let market_value = holding.market_value()?;
        let cost_basis = holding.cost_basis()?;
        let gain_loss = checked_sub("gain/loss", market_value, cost_basis)?;
        Ok(HoldingPerformance {
            id: holding.id.clone(),
            name: holding.name.clone(),
            ticker: holding.ticker.clone(),
            market_value,
            cost_basis,
            gain_loss,
            gain_loss_percent: percent_of(gain_loss, cost_basis)?,
        })
    }
}

/// Aggregate valuation of all holdings of a user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_cost_basis: Decimal,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percent: Decimal,
    pub holdings: Vec<HoldingPerformance>,
}

impl PortfolioSummary {
    pub fn from_holdings(holdings: &[Holding]) -> Result<Self> {
        let performances = holdings
            .iter()
            .map(HoldingPerformance::try_from)
            .collect::<Result<Vec<_>>>()?;
        let total_value = checked_sum("total value", performances.iter().map(|p| p.market_value))?;
        let total_cost_basis =
            checked_sum("total cost basis", performances.iter().map(|p| p.cost_basis))?;
        let total_gain_loss = checked_sub("total gain/loss", total_value, total_cost_basis)?;
        Ok(PortfolioSummary {
            total_value,
            total_cost_basis,
            total_gain_loss,
            total_gain_loss_percent: percent_of(total_gain_loss, total_cost_basis)?,
            holdings: performances,
        })
    }
}

/// `part / whole * 100` rounded to two decimals; zero when `whole` is zero.
fn percent_of(part: Decimal, whole: Decimal) -> Result<Decimal> {
    if whole.is_zero() {
        return Ok(Decimal::ZERO);
    }
    checked_percent(part, whole)
        .map(|p| p.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| overflow("gain/loss percent"))
}
