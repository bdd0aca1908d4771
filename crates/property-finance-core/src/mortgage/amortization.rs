use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PropertyFinanceError;
use crate::time_value::{compound_factor, level_payment};
use crate::types::{percent_to_rate, with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::validation::{assert_in_range, assert_non_negative, assert_positive, assert_years};
use crate::PropertyFinanceResult;

// ---------------------------------------------------------------------------
// Display bounds
// ---------------------------------------------------------------------------

/// Number of years plotted on the amortization chart. A display bound only:
/// payment totals always cover the full term.
pub const MAX_CHART_YEARS: u32 = 30;

/// Largest down payment share the calculator slider offers. Never enforced.
pub const MAX_DOWN_PAYMENT_SHARE: Decimal = dec!(0.5);

/// Loan terms offered in the term selector.
pub const STANDARD_TERMS_YEARS: [u32; 6] = [5, 10, 15, 20, 25, 30];

const MONTHS_PER_YEAR: u32 = 12;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a fixed-rate mortgage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationInput {
    /// Property price before the down payment is deducted
    pub principal: Money,
    /// Cash paid up front, `0 <= down_payment <= principal`
    pub down_payment: Money,
    /// Annual nominal interest rate as a percentage (15 = 15%)
    pub annual_interest_rate_percent: Percent,
    /// Loan term in whole years
    pub term_years: u32,
}

/// Cumulative position at the end of one loan year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationYear {
    pub year: u32,
    /// Principal repaid since origination
    pub principal_paid: Money,
    /// Interest paid since origination
    pub interest_paid: Money,
    /// Outstanding balance, floored at zero
    pub remaining_balance: Money,
}

/// Payment totals and the year-by-year schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Level monthly payment
    pub monthly_payment: Money,
    /// Monthly payment times number of payments, over the full term
    pub total_payment: Money,
    /// Total payment less the financed principal
    pub total_interest: Money,
    /// Principal less down payment
    pub financed_principal: Money,
    /// Down payment as a share of principal (percentage)
    pub down_payment_percent: Percent,
    pub number_of_payments: u32,
    /// One row per year, capped at `MAX_CHART_YEARS`
    pub schedule: Vec<AmortizationYear>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the level monthly payment, lifetime totals and the yearly
/// amortization schedule of a fixed-rate mortgage.
///
/// Values are returned unrounded. Inputs outside what the calculator UI
/// normally offers (long terms, large down payments) are computed as given
/// and flagged in `warnings`.
pub fn compute_amortization(
    input: &AmortizationInput,
) -> PropertyFinanceResult<ComputationOutput<AmortizationResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let financed_principal = input.principal - input.down_payment;
    let monthly_rate =
        percent_to_rate(input.annual_interest_rate_percent) / Decimal::from(MONTHS_PER_YEAR);
    let number_of_payments = input
        .term_years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| PropertyFinanceError::validation("term_years", "term is too long"))?;

    if compound_factor(monthly_rate, number_of_payments).is_none() {
        return Err(out_of_range(
            "annual_interest_rate_percent",
            format!("rate compounded over {number_of_payments} payments exceeds the representable range"),
        ));
    }
    let monthly_payment = level_payment(financed_principal, monthly_rate, number_of_payments)
        .ok_or_else(|| out_of_range("principal", "payment exceeds the representable range"))?;
    let total_payment = monthly_payment
        .checked_mul(Decimal::from(number_of_payments))
        .ok_or_else(|| out_of_range("principal", "total payment exceeds the representable range"))?;
    let total_interest = total_payment - financed_principal;

    let chart_years = input.term_years.min(MAX_CHART_YEARS);
    let schedule = build_schedule(
        financed_principal,
        monthly_rate,
        monthly_payment,
        number_of_payments,
        chart_years,
    );

    let down_payment_percent = input.down_payment / input.principal * Decimal::ONE_HUNDRED;

    collect_warnings(input, &mut warnings);

    let elapsed = start.elapsed().as_micros() as u64;
    log::debug!(
        "amortization: {} payments, {} schedule rows, {}us",
        number_of_payments,
        schedule.len(),
        elapsed
    );

    let output = AmortizationResult {
        monthly_payment,
        total_payment,
        total_interest,
        financed_principal,
        down_payment_percent,
        number_of_payments,
        schedule,
    };

    Ok(with_metadata(
        "Fixed-Rate Mortgage Amortization (Level Monthly Payment)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &AmortizationInput) -> PropertyFinanceResult<()> {
    assert_positive(input.principal, "principal")?;
    assert_in_range(input.down_payment, Decimal::ZERO, input.principal, "down_payment")?;
    assert_non_negative(input.annual_interest_rate_percent, "annual_interest_rate_percent")?;
    assert_years(input.term_years, "term_years")?;
    Ok(())
}

fn out_of_range(field: &str, message: impl Into<String>) -> PropertyFinanceError {
    PropertyFinanceError::validation(field, message)
}

fn collect_warnings(input: &AmortizationInput, warnings: &mut Vec<String>) {
    if input.term_years > MAX_CHART_YEARS {
        warnings.push(format!(
            "Term of {} years exceeds the {MAX_CHART_YEARS}-year chart horizon; schedule covers the first {MAX_CHART_YEARS} years only",
            input.term_years
        ));
    }

    if !STANDARD_TERMS_YEARS.contains(&input.term_years) {
        warnings.push(format!(
            "Term of {} years is not one of the standard terms {:?}",
            input.term_years, STANDARD_TERMS_YEARS
        ));
    }

    if input.down_payment > input.principal * MAX_DOWN_PAYMENT_SHARE {
        warnings.push(format!(
            "Down payment is above {}% of the property price",
            MAX_DOWN_PAYMENT_SHARE * Decimal::ONE_HUNDRED
        ));
    }
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// Simulate the loan month by month, emitting cumulative totals at the end of
/// each year for the first `chart_years` years.
fn build_schedule(
    financed_principal: Money,
    monthly_rate: Rate,
    monthly_payment: Money,
    total_months: u32,
    chart_years: u32,
) -> Vec<AmortizationYear> {
    let months = total_months.min(chart_years * MONTHS_PER_YEAR);
    let mut schedule = Vec::with_capacity(chart_years as usize);

    let mut remaining = financed_principal;
    let mut principal_paid = Decimal::ZERO;
    let mut interest_paid = Decimal::ZERO;

    for month in 1..=months {
        let interest = remaining * monthly_rate;
        let principal_part = monthly_payment - interest;
        remaining -= principal_part;
        principal_paid += principal_part;
        interest_paid += interest;

        if month % MONTHS_PER_YEAR == 0 || month == total_months {
            let row = AmortizationYear {
                year: month.div_ceil(MONTHS_PER_YEAR),
                principal_paid,
                interest_paid,
                // Final-payment drift can leave a tiny negative balance
                remaining_balance: remaining.max(Decimal::ZERO),
            };
            log::trace!("amortization year {}: balance {}", row.year, row.remaining_balance);
            schedule.push(row);
        }
    }

    schedule
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
