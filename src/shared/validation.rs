use rust_decimal::Decimal;
use validator::ValidationError;

use crate::shared::constants::{PRICE_MAX, PRICE_SCALE};

/// Rejects strings made only of whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Prices are non-negative, below [`PRICE_MAX`] and carry at most two
/// fractional digits, so the store never has to round or reject them.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        let mut error = ValidationError::new("negative_price");
        error.message = Some("price must not be negative".into());
        return Err(error);
    }
    if price.abs() >= PRICE_MAX {
        let mut error = ValidationError::new("price_too_large");
        error.message = Some(format!("price must be less than {}", PRICE_MAX).into());
        return Err(error);
    }
    if price.scale() > PRICE_SCALE {
        let mut error = ValidationError::new("price_scale");
        error.message = Some(format!("price must have at most {} decimal places", PRICE_SCALE).into());
        return Err(error);
    }
    Ok(())
}
