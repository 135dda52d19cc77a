use anyhow::anyhow;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Amounts are stored as integer minor units with this many decimal places.
pub const SCALE: u32 = 2;

pub fn to_minor_units(amount: Decimal) -> anyhow::Result<i64> {
    let scaled = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| anyhow!("Amount {} out of range", amount))?;
    if !scaled.fract().is_zero() {
        return Err(anyhow!("Amount {} has more than {} decimal places", amount, SCALE));
    }
    scaled
        .to_i64()
        .ok_or_else(|| anyhow!("Amount {} out of range", amount))
}

pub fn from_minor_units(minor_units: i64) -> Decimal {
    Decimal::new(minor_units, SCALE)
}
