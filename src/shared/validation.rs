use rust_decimal::Decimal;
use validator::ValidationError;

/// Validator for price fields: must be strictly greater than zero.
/// Used via `#[validate(custom(function = validate_price))]` on request DTOs.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("price").with_message("Price must be greater than 0".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_price_positive() {
        assert!(validate_price(&dec!(0.01)).is_ok());
        assert!(validate_price(&dec!(19.99)).is_ok());
        assert!(validate_price(&dec!(100000)).is_ok());
    }

    #[test]
    fn test_validate_price_zero_or_negative() {
        assert!(validate_price(&Decimal::ZERO).is_err());
        assert!(validate_price(&dec!(-0.01)).is_err());
        assert!(validate_price(&dec!(-50)).is_err());
    }
}
