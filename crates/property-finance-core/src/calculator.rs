//! Mode selection for the property calculator.
//!
//! The calculator exposes two independent tools behind one entry point; the
//! request names the active mode and carries that mode's input.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::investment::roi::{self, RoiInput, RoiResult};
use crate::mortgage::amortization::{self, AmortizationInput, AmortizationResult};
use crate::types::ComputationOutput;
use crate::PropertyFinanceResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CalculatorRequest {
    Mortgage(AmortizationInput),
    Investment(RoiInput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CalculatorOutput {
    Mortgage(ComputationOutput<AmortizationResult>),
    Investment(ComputationOutput<RoiResult>),
}

impl CalculatorRequest {
    pub fn mode(&self) -> &'static str {
        match self {
            CalculatorRequest::Mortgage(_) => "mortgage",
            CalculatorRequest::Investment(_) => "investment",
        }
    }
}

/// Run whichever calculator the request selects.
pub fn run_calculator(request: &CalculatorRequest) -> PropertyFinanceResult<CalculatorOutput> {
    log::debug!("calculator mode: {}", request.mode());
    match request {
        CalculatorRequest::Mortgage(input) => {
            amortization::compute_amortization(input).map(CalculatorOutput::Mortgage)
        }
        CalculatorRequest::Investment(input) => {
            roi::compute_roi(input).map(CalculatorOutput::Investment)
        }
    }
}

/// Parse `input_json`, run `compute`, and serialise its output. Malformed
/// input surfaces as `PropertyFinanceError::Serialization`.
pub fn run_json<I, O>(
    input_json: &str,
    compute: impl FnOnce(&I) -> PropertyFinanceResult<O>,
) -> PropertyFinanceResult<String>
where
    I: DeserializeOwned,
    O: Serialize,
{
    let input: I = serde_json::from_str(input_json)?;
    let output = compute(&input)?;
    Ok(serde_json::to_string(&output)?)
}
