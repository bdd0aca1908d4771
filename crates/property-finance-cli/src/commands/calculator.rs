use clap::Args;
use serde_json::Value;

use property_finance_core::calculator::{self, CalculatorRequest};

use crate::input;

/// Arguments for a mode-tagged calculator request
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to JSON or YAML request with a "mode" of "mortgage" or "investment"
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: CalculatorRequest = input::load(args.input.as_deref())?
        .ok_or("--input <file> or a request on stdin is required for calculate")?;
    let result = calculator::run_calculator(&request)?;
    Ok(serde_json::to_value(result)?)
}
