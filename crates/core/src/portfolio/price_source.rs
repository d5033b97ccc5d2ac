use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::PRICE_DECIMAL_PRECISION;
use crate::investments::Holding;

/// Supplies the next current price of a holding during a refresh.
pub trait PriceSource: Send + Sync {
    fn next_price(&self, holding: &Holding) -> Decimal;
}

/// Moves each price by a uniformly random change in `[-max_change, +max_change)`.
///
/// Stands in for a market data feed; prices are rounded to cents.
#[derive(Debug, Clone)]
pub struct SimulatedPriceSource {
    max_change_micros: i64,
}

impl SimulatedPriceSource {
    /// `max_change_percent` of 2 gives moves between -2% and +2%.
    pub fn new(max_change_percent: u32) -> Self {
        SimulatedPriceSource {
            max_change_micros: i64::from(max_change_percent) * 10_000,
        }
    }

    /// Applies a relative `change` (0.015 = +1.5%) and rounds to cents.
    ///
    /// A move that would leave the `Decimal` range keeps the old price.
    pub fn apply_change(price: Decimal, change: Decimal) -> Decimal {
        Decimal::ONE
            .checked_add(change)
            .and_then(|factor| price.checked_mul(factor))
            .map(|p| {
                p.round_dp_with_strategy(PRICE_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
            })
            .unwrap_or(price)
    }
}

impl Default for SimulatedPriceSource {
    fn default() -> Self {
        SimulatedPriceSource::new(2)
    }
}

impl PriceSource for SimulatedPriceSource {
    fn next_price(&self, holding: &Holding) -> Decimal {
        if self.max_change_micros == 0 {
            return holding.current_price;
        }
        let micros = rand::thread_rng().gen_range(-self.max_change_micros..self.max_change_micros);
        let change = Decimal::new(micros, 6);
        Self::apply_change(holding.current_price, change)
    }
}
