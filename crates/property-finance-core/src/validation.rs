//! Field-level input checks shared by the calculators.
//!
//! Each helper fails with [`PropertyFinanceError::Validation`] naming the
//! offending field, so a caller can map the failure back to a form input.

use rust_decimal::Decimal;

use crate::error::PropertyFinanceError;
use crate::PropertyFinanceResult;

/// Require `value > 0`.
pub fn assert_positive(value: Decimal, field: &str) -> PropertyFinanceResult<()> {
    if value <= Decimal::ZERO {
        return Err(PropertyFinanceError::validation(
            field,
            format!("must be greater than zero (got {value})"),
        ));
    }
    Ok(())
}

/// Require `value >= 0`.
pub fn assert_non_negative(value: Decimal, field: &str) -> PropertyFinanceResult<()> {
    if value < Decimal::ZERO {
        return Err(PropertyFinanceError::validation(
            field,
            format!("must not be negative (got {value})"),
        ));
    }
    Ok(())
}

/// Require `min <= value <= max` (both bounds inclusive).
pub fn assert_in_range(
    value: Decimal,
    min: Decimal,
    max: Decimal,
    field: &str,
) -> PropertyFinanceResult<()> {
    if value < min || value > max {
        return Err(PropertyFinanceError::validation(
            field,
            format!("must be between {min} and {max} (got {value})"),
        ));
    }
    Ok(())
}

/// Require a whole number of years of at least one.
pub fn assert_years(years: u32, field: &str) -> PropertyFinanceResult<()> {
    assert_positive(Decimal::from(years), field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn field_of(result: PropertyFinanceResult<()>) -> String {
        match result {
            Err(PropertyFinanceError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_positive() {
        assert!(assert_positive(dec!(0.01), "principal").is_ok());
        assert_eq!(field_of(assert_positive(Decimal::ZERO, "principal")), "principal");
        assert_eq!(field_of(assert_positive(dec!(-1), "principal")), "principal");
    }

    #[test]
    fn test_non_negative() {
        assert!(assert_non_negative(Decimal::ZERO, "annual_rent").is_ok());
        assert_eq!(
            field_of(assert_non_negative(dec!(-0.5), "annual_rent")),
            "annual_rent"
        );
    }

    #[test]
    fn test_in_range_inclusive_bounds() {
        assert!(assert_in_range(dec!(0), dec!(0), dec!(100), "down_payment").is_ok());
        assert!(assert_in_range(dec!(100), dec!(0), dec!(100), "down_payment").is_ok());
        assert_eq!(
            field_of(assert_in_range(dec!(100.01), dec!(0), dec!(100), "down_payment")),
            "down_payment"
        );
        assert_eq!(
            field_of(assert_in_range(dec!(-1), dec!(0), dec!(100), "down_payment")),
            "down_payment"
        );
    }

    #[test]
    fn test_years() {
        assert!(assert_years(1, "term_years").is_ok());
        assert_eq!(field_of(assert_years(0, "term_years")), "term_years");
    }

    #[test]
    fn test_message_carries_value() {
        let err = assert_positive(dec!(-3), "property_value").unwrap_err();
        assert!(err.to_string().contains("-3"), "{err}");
    }
}
