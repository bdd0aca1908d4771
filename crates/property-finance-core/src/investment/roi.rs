use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PropertyFinanceError;
use crate::types::{percent_to_rate, with_metadata, ComputationOutput, Money, Percent};
use crate::validation::{assert_non_negative, assert_positive, assert_years};
use crate::PropertyFinanceResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a buy-and-hold rental projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiInput {
    /// Purchase price / current market value
    pub property_value: Money,
    /// Gross annual rental income
    pub annual_rent: Money,
    /// Annual operating expenses; may exceed rent
    pub annual_expenses: Money,
    /// Annual appreciation as a percentage (7 = 7%)
    pub appreciation_rate_percent: Percent,
    /// Holding period in whole years
    pub investment_period_years: u32,
}

/// Position at the end of one holding year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiYear {
    pub year: u32,
    /// Appreciated property value
    pub property_value: Money,
    /// Net rental income accrued since purchase (simple, not reinvested)
    pub cumulative_rental_income: Money,
    /// Value plus accrued income, less the original property value
    pub total_return: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiResult {
    /// Net annual income / property value (percentage)
    pub cash_on_cash_percent: Percent,
    /// Appreciation-only return over the period (percentage)
    pub total_roi_percent: Percent,
    /// Property value at the end of the period, excluding rental income
    pub projected_value: Money,
    /// Rent less expenses
    pub net_annual_income: Money,
    /// Net income over the whole period
    pub cumulative_rental_income: Money,
    /// One row per year, 1..=investment_period_years
    pub schedule: Vec<RoiYear>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project property value, accrued rental income and return over a holding
/// period.
///
/// `projected_value` and `total_roi_percent` cover appreciation only; rental
/// income is reported through `cash_on_cash_percent` and the schedule's
/// `total_return` column.
pub fn compute_roi(input: &RoiInput) -> PropertyFinanceResult<ComputationOutput<RoiResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let net_annual_income = input.annual_rent - input.annual_expenses;
    let cash_on_cash_percent = percent_of(net_annual_income, input.property_value)
        .ok_or_else(|| out_of_range("property_value"))?;

    if net_annual_income < Decimal::ZERO {
        warnings.push(format!(
            "Annual expenses exceed rent; net annual income is {net_annual_income}"
        ));
    }

    let growth = Decimal::ONE + percent_to_rate(input.appreciation_rate_percent);
    let mut future_value = input.property_value;
    let mut cumulative_rental_income = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(input.investment_period_years as usize);

    for year in 1..=input.investment_period_years {
        future_value = future_value
            .checked_mul(growth)
            .ok_or_else(|| out_of_range("appreciation_rate_percent"))?;
        cumulative_rental_income = net_annual_income
            .checked_mul(Decimal::from(year))
            .ok_or_else(|| out_of_range("annual_rent"))?;
        let total_return = future_value
            .checked_add(cumulative_rental_income)
            .and_then(|v| v.checked_sub(input.property_value))
            .ok_or_else(|| out_of_range("annual_rent"))?;

        let row = RoiYear {
            year,
            property_value: future_value,
            cumulative_rental_income,
            total_return,
        };
        log::trace!("roi year {}: value {}", row.year, row.property_value);
        schedule.push(row);
    }

    let projected_value = future_value;
    let appreciation = projected_value - input.property_value;
    let total_roi_percent = percent_of(appreciation, input.property_value)
        .ok_or_else(|| out_of_range("property_value"))?;

    let elapsed = start.elapsed().as_micros() as u64;
    log::debug!("roi: {} schedule rows, {}us", schedule.len(), elapsed);

    let output = RoiResult {
        cash_on_cash_percent,
        total_roi_percent,
        projected_value,
        net_annual_income,
        cumulative_rental_income,
        schedule,
    };

    Ok(with_metadata(
        "Rental Property ROI Projection (Compound Appreciation, Simple Rental Accrual)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &RoiInput) -> PropertyFinanceResult<()> {
    assert_positive(input.property_value, "property_value")?;
    assert_non_negative(input.annual_rent, "annual_rent")?;
    assert_non_negative(input.annual_expenses, "annual_expenses")?;
    assert_non_negative(input.appreciation_rate_percent, "appreciation_rate_percent")?;
    assert_years(input.investment_period_years, "investment_period_years")?;
    Ok(())
}

fn out_of_range(field: &str) -> PropertyFinanceError {
    PropertyFinanceError::validation(field, "projection exceeds the representable range")
}

/// `part / whole * 100`, or `None` if the ratio leaves the decimal range.
fn percent_of(part: Money, whole: Money) -> Option<Percent> {
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_value::compound_factor;
    use rust_decimal_macros::dec;

    fn sample_input() -> RoiInput {
        RoiInput {
            property_value: dec!(40000000),
            annual_rent: dec!(2400000),
            annual_expenses: dec!(600000),
            appreciation_rate_percent: dec!(7),
            investment_period_years: 10,
        }
    }

    #[test]
    fn test_reference_projection() {
        let r = compute_roi(&sample_input()).unwrap().result;

        assert_eq!(r.cash_on_cash_percent, dec!(4.5));
        assert_eq!(r.net_annual_income, dec!(1800000));
        assert_eq!(r.schedule.len(), 10);
        assert!(
            (r.projected_value - dec!(78686054.29)).abs() < dec!(0.01),
            "projected value {}",
            r.projected_value
        );
        assert!(
            (r.total_roi_percent - dec!(96.715)).abs() < dec!(0.001),
            "total ROI {}",
            r.total_roi_percent
        );
        assert_eq!(r.cumulative_rental_income, dec!(18000000));
    }

    #[test]
    fn test_schedule_matches_closed_form_growth() {
        let r = compute_roi(&sample_input()).unwrap().result;
        for row in &r.schedule {
            let expected = dec!(40000000) * compound_factor(dec!(0.07), row.year).unwrap();
            assert_eq!(row.property_value, expected);
        }
        assert_eq!(r.schedule[9].property_value, r.projected_value);
    }

    #[test]
    fn test_total_return_is_over_original_value() {
        let r = compute_roi(&sample_input()).unwrap().result;
        let year3 = &r.schedule[2];
        assert_eq!(year3.year, 3);
        assert_eq!(year3.cumulative_rental_income, dec!(5400000));
        assert_eq!(
            year3.total_return,
            year3.property_value + dec!(5400000) - dec!(40000000)
        );
    }

    #[test]
    fn test_projected_value_excludes_rent() {
        let r = compute_roi(&sample_input()).unwrap().result;
        let last = r.schedule.last().unwrap();
        assert_eq!(r.projected_value, last.property_value);
        assert_eq!(
            last.total_return,
            r.projected_value - dec!(40000000) + r.cumulative_rental_income
        );
    }

    #[test]
    fn test_zero_appreciation_is_flat() {
        let input = RoiInput {
            appreciation_rate_percent: Decimal::ZERO,
            ..sample_input()
        };
        let r = compute_roi(&input).unwrap().result;
        assert_eq!(r.projected_value, dec!(40000000));
        assert!(r.total_roi_percent.is_zero());
        for row in &r.schedule {
            assert_eq!(row.property_value, dec!(40000000));
            assert_eq!(row.total_return, row.cumulative_rental_income);
        }
    }

    #[test]
    fn test_expenses_above_rent_is_negative_not_error() {
        let input = RoiInput {
            annual_rent: dec!(500000),
            annual_expenses: dec!(900000),
            ..sample_input()
        };
        let out = compute_roi(&input).unwrap();
        assert_eq!(out.result.cash_on_cash_percent, dec!(-1));
        assert_eq!(out.result.schedule[0].cumulative_rental_income, dec!(-400000));
        assert!(out.warnings.iter().any(|w| w.contains("exceed rent")));
    }

    #[test]
    fn test_zero_rent_and_expenses() {
        let input = RoiInput {
            annual_rent: Decimal::ZERO,
            annual_expenses: Decimal::ZERO,
            ..sample_input()
        };
        let out = compute_roi(&input).unwrap();
        assert!(out.result.cash_on_cash_percent.is_zero());
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_single_year() {
        let input = RoiInput {
            investment_period_years: 1,
            ..sample_input()
        };
        let r = compute_roi(&input).unwrap().result;
        assert_eq!(r.schedule.len(), 1);
        assert_eq!(r.projected_value, dec!(42800000));
        assert_eq!(r.total_roi_percent, dec!(7));
    }

    #[test]
    fn test_zero_property_value_error() {
        let input = RoiInput {
            property_value: Decimal::ZERO,
            annual_rent: dec!(1000),
            annual_expenses: dec!(500),
            appreciation_rate_percent: dec!(5),
            investment_period_years: 10,
        };
        let err = compute_roi(&input).unwrap_err();
        assert_eq!(err.field(), Some("property_value"));
    }

    #[test]
    fn test_negative_fields_rejected() {
        let cases = [
            (
                RoiInput { annual_rent: dec!(-1), ..sample_input() },
                "annual_rent",
            ),
            (
                RoiInput { annual_expenses: dec!(-1), ..sample_input() },
                "annual_expenses",
            ),
            (
                RoiInput { appreciation_rate_percent: dec!(-2), ..sample_input() },
                "appreciation_rate_percent",
            ),
            (
                RoiInput { investment_period_years: 0, ..sample_input() },
                "investment_period_years",
            ),
        ];
        for (input, field) in cases {
            let err = compute_roi(&input).unwrap_err();
            assert_eq!(err.field(), Some(field));
        }
    }
}
