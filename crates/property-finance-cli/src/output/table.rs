use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::format_cell;

/// Print the result as a field/value table, then the yearly schedule as its
/// own table, then any warnings and the methodology.
pub fn print_table(value: &Value) {
    let Some(envelope) = value.as_object() else {
        println!("{}", value);
        return;
    };

    match envelope.get("result") {
        Some(Value::Object(result)) => {
            println!("{}", summary_table(result));
            if let Some(Value::Array(rows)) = result.get("schedule") {
                if let Some(table) = schedule_table(rows) {
                    println!("\n{}", table);
                }
            }
        }
        _ => println!("{}", summary_table(envelope)),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn summary_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map.iter().filter(|(k, _)| k.as_str() != "schedule") {
        builder.push_record([key.as_str(), &format_cell(val)]);
    }
    builder.build()
}

fn schedule_table(rows: &[Value]) -> Option<Table> {
    let Some(Value::Object(first)) = rows.first() else {
        return None;
    };

    let mut headers: Vec<String> = first.keys().cloned().collect();
    headers.sort_by_key(|h| h.as_str() != "year");
    let mut builder = Builder::default();
    builder.push_record(headers.clone());

    for row in rows.iter().filter_map(Value::as_object) {
        builder.push_record(
            headers
                .iter()
                .map(|h| row.get(h).map(format_cell).unwrap_or_default()),
        );
    }

    Some(builder.build())
}
