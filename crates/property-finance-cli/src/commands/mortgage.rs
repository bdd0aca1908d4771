use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use property_finance_core::mortgage::amortization::{self, AmortizationInput};

use crate::input;

/// Arguments for the mortgage calculator
#[derive(Args)]
pub struct MortgageArgs {
    /// Property price before the down payment
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Cash paid up front (defaults to 0)
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 15 for 15%)
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long, alias = "years")]
    pub term_years: Option<u32>,

    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_mortgage(args: MortgageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mortgage_input: AmortizationInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => input_from_flags(&args)?,
    };
    let result = amortization::compute_amortization(&mortgage_input)?;
    Ok(serde_json::to_value(result)?)
}

fn input_from_flags(args: &MortgageArgs) -> Result<AmortizationInput, Box<dyn std::error::Error>> {
    Ok(AmortizationInput {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        down_payment: args.down_payment.unwrap_or(Decimal::ZERO),
        annual_interest_rate_percent: args
            .interest_rate
            .ok_or("--interest-rate is required (or provide --input)")?,
        term_years: args
            .term_years
            .ok_or("--term-years is required (or provide --input)")?,
    })
}
