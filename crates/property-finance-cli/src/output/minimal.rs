use serde_json::Value;

use super::{format_cell, result_of};

/// Headline figure of each calculator, in priority order.
const PRIORITY_KEYS: [&str; 3] = ["monthly_payment", "cash_on_cash_percent", "projected_value"];

/// Print just the headline value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let result = result_of(value);

    if let Value::Object(map) = result {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                return format_cell(val);
            }
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_cell(val));
        }
    }

    format_cell(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mortgage_headline() {
        let v = json!({ "result": { "total_payment": "9", "monthly_payment": "1896.20" } });
        assert_eq!(minimal_line(&v), "1896.20");
    }

    #[test]
    fn test_roi_headline() {
        let v = json!({ "result": { "total_roi_percent": "96.7", "cash_on_cash_percent": "4.5" } });
        assert_eq!(minimal_line(&v), "4.5");
    }

    #[test]
    fn test_fallback_first_field() {
        let v = json!({ "result": { "other": 1 } });
        assert_eq!(minimal_line(&v), "other: 1");
    }
}
