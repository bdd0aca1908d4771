use serde_json::Value;
use std::io;

use super::{format_cell, result_of};

/// Write output as CSV to stdout.
///
/// A result carrying a yearly `schedule` is exported row by row (one line per
/// year); any other result is written as two-column `field,value` pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    if let Err(e) = write_csv(&mut wtr, value) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    let result = result_of(value);

    match result {
        Value::Object(map) => match map.get("schedule") {
            Some(Value::Array(rows)) if !rows.is_empty() => write_rows(wtr, rows)?,
            _ => {
                wtr.write_record(["field", "value"])?;
                for (key, val) in map {
                    wtr.write_record([key.as_str(), &format_cell(val)])?;
                }
            }
        },
        Value::Array(rows) => write_rows(wtr, rows)?,
        _ => wtr.write_record([format_cell(result)])?,
    }

    wtr.flush()?;
    Ok(())
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        for item in rows {
            wtr.write_record([format_cell(item)])?;
        }
        return Ok(());
    };

    let mut headers: Vec<&str> = first.keys().map(String::as_str).collect();
    // Year leads each exported row
    headers.sort_by_key(|h| *h != "year");
    wtr.write_record(&headers)?;

    for row in rows.iter().filter_map(Value::as_object) {
        let record: Vec<String> = headers
            .iter()
            .map(|h| row.get(*h).map(format_cell).unwrap_or_default())
            .collect();
        wtr.write_record(&record)?;
    }
    Ok(())
}
