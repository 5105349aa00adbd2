use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// Scalar fields render as a Field/Value table; nested objects (the two
/// strategy plans) and arrays of objects (schedule rows, payoff orderings)
/// each get their own labelled table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_section(None, result);
                print_envelope_trailer(map);
            } else {
                print_section(None, value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_section(label: Option<&str>, value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(l) = label {
                println!("\n{}:", l);
            }

            // Scalars first, in one Field/Value table
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            let mut has_scalars = false;
            for (key, val) in map {
                if is_scalar(val) || is_scalar_array(val) {
                    builder.push_record([key.as_str(), &format_value(val)]);
                    has_scalars = true;
                }
            }
            if has_scalars {
                println!("{}", Table::from(builder));
            }

            // Then nested structures, each under its own heading
            for (key, val) in map {
                match val {
                    Value::Object(_) => print_section(Some(key), val),
                    Value::Array(arr) if !is_scalar_array(val) => {
                        println!("\n{}:", key);
                        print_array_table(arr);
                    }
                    _ => {}
                }
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", format_value(value)),
    }
}

fn print_envelope_trailer(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Collect all keys from the first object for headers
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(format_value)
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        // Simple array of values
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

/// Arrays of plain values (e.g. suggestion lists) stay in the main table.
fn is_scalar_array(value: &Value) -> bool {
    matches!(value, Value::Array(arr) if arr.iter().all(is_scalar))
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
