use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use property_finance_core::investment::roi::{self, RoiInput};

use crate::input;

/// Arguments for the rental ROI projection
#[derive(Args)]
pub struct RoiArgs {
    /// Purchase price / market value of the property
    #[arg(long)]
    pub property_value: Option<Decimal>,

    /// Gross annual rental income
    #[arg(long)]
    pub annual_rent: Option<Decimal>,

    /// Annual operating expenses (defaults to 0)
    #[arg(long)]
    pub annual_expenses: Option<Decimal>,

    /// Annual appreciation as a percentage (e.g. 7 for 7%)
    #[arg(long)]
    pub appreciation_rate: Option<Decimal>,

    /// Holding period in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_roi(args: RoiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let roi_input: RoiInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => input_from_flags(&args)?,
    };
    let result = roi::compute_roi(&roi_input)?;
    Ok(serde_json::to_value(result)?)
}

fn input_from_flags(args: &RoiArgs) -> Result<RoiInput, Box<dyn std::error::Error>> {
    Ok(RoiInput {
        property_value: args
            .property_value
            .ok_or("--property-value is required (or provide --input)")?,
        annual_rent: args
            .annual_rent
            .ok_or("--annual-rent is required (or provide --input)")?,
        annual_expenses: args.annual_expenses.unwrap_or(Decimal::ZERO),
        appreciation_rate_percent: args
            .appreciation_rate
            .ok_or("--appreciation-rate is required (or provide --input)")?,
        investment_period_years: args
            .years
            .ok_or("--years is required (or provide --input)")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn args() -> RoiArgs {
        RoiArgs {
            property_value: Some(dec!(40000000)),
            annual_rent: Some(dec!(2400000)),
            annual_expenses: Some(dec!(600000)),
            appreciation_rate: Some(dec!(7)),
            years: Some(10),
            input: None,
        }
    }

    #[test]
    fn test_flags_build_input() {
        let input = input_from_flags(&args()).unwrap();
        assert_eq!(input.annual_expenses, dec!(600000));
        assert_eq!(input.investment_period_years, 10);
    }

    #[test]
    fn test_missing_years_flag() {
        let err = input_from_flags(&RoiArgs { years: None, ..args() }).unwrap_err();
        assert!(err.to_string().contains("--years"));
    }
}
