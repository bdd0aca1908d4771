use napi::Result as NapiResult;
use napi_derive::napi;

use property_finance_core::calculator::run_json;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Mortgage
// ---------------------------------------------------------------------------

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    run_json(
        &input_json,
        property_finance_core::mortgage::amortization::compute_amortization,
    )
    .map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Investment
// ---------------------------------------------------------------------------

#[napi]
pub fn roi_projection(input_json: String) -> NapiResult<String> {
    run_json(&input_json, property_finance_core::investment::roi::compute_roi)
        .map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// Mode-tagged request: `{"mode": "mortgage" | "investment", ...input}`.
#[napi]
pub fn run_calculator(input_json: String) -> NapiResult<String> {
    run_json(
        &input_json,
        property_finance_core::calculator::run_calculator,
    )
    .map_err(to_napi_error)
}
