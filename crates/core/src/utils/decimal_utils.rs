//! Checked arithmetic for money values.
//!
//! Inputs are capped by [`crate::constants::MAX_AMOUNT`], but products and
//! totals over many rows can still leave the `Decimal` range.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{Error, Result};

pub fn overflow(what: &str) -> Error {
    Error::Unexpected(format!("{} is too large to compute", what))
}

pub fn checked_mul(what: &str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(what))
}

pub fn checked_sub(what: &str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow(what))
}

pub fn checked_sum<I>(what: &str, values: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(value))
        .ok_or_else(|| overflow(what))
}

/// `part / whole * 100`, or `None` when `whole` is zero or the ratio overflows.
pub fn checked_percent(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)?.checked_mul(dec!(100))
}
