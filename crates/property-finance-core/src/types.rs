use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
/// Unit-agnostic: currency formatting happens in the presentation layer.
pub type Money = Decimal;

/// Percentages as entered by a user (15 = 15%).
pub type Percent = Decimal;

/// Rates expressed as decimals (0.0125 = 1.25% per period).
pub type Rate = Decimal;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Convert a user-facing percentage (15) into a decimal rate (0.15).
pub fn percent_to_rate(percent: Percent) -> Rate {
    percent / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_to_rate() {
        assert_eq!(percent_to_rate(dec!(15)), dec!(0.15));
        assert_eq!(percent_to_rate(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_with_metadata_echoes_assumptions() {
        let out = with_metadata(
            "Test",
            &serde_json::json!({ "principal": "100" }),
            vec!["note".into()],
            42,
            dec!(1.5),
        );
        assert_eq!(out.methodology, "Test");
        assert_eq!(out.assumptions["principal"], "100");
        assert_eq!(out.warnings, vec!["note".to_string()]);
        assert_eq!(out.metadata.computation_time_us, 42);
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    }
}
