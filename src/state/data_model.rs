use std::collections::BTreeMap;

use serde_json::{Number, Value};

pub type Row = BTreeMap<String, Value>;
pub type TableData = Vec<Row>;

/// Formats a JSON value for display in a table cell.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Display text of `column` in `row`, empty when the cell is missing.
pub fn cell_text(row: &Row, column: &str) -> String {
    row.get(column).map(display_value).unwrap_or_default()
}

/// Turns edited text back into a cell value, keeping the type of `previous`
/// when the text still fits it.
pub fn coerce_input(input: &str, previous: &Value) -> Value {
    match previous {
        Value::Number(_) => parse_number(input.trim())
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(input.to_string())),
        Value::Bool(_) => match input.trim() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(input.to_string()),
        },
        Value::Null if input.is_empty() => Value::Null,
        _ => Value::String(input.to_string()),
    }
}

fn parse_number(text: &str) -> Option<Number> {
    if let Ok(int) = text.parse::<i64>() {
        return Some(int.into());
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}
