use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

pub const MAX_AMOUNT: i64 = 10_000_000_000_000_000;

pub fn required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError(format!("{} is required", field)));
    }
    Ok(())
}

pub fn length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let chars = value.chars().count();
    if chars < min || chars > max {
        return Err(ValidationError(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}

pub fn amount(value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ONE || value > Decimal::from(MAX_AMOUNT) {
        return Err(ValidationError(format!(
            "Amount must be between 1 and {}",
            MAX_AMOUNT
        )));
    }
    if value.round_dp(2) != value {
        return Err(ValidationError(
            "Amount can have at most 2 decimal places".to_owned(),
        ));
    }
    Ok(())
}
