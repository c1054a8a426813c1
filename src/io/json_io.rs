use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::state::data_model::{Row, TableData};

#[derive(Debug, Error)]
pub enum JsonIoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("JSON root is not an array")]
    NotAnArray,
    #[error("JSON array contains non-object elements")]
    NotArrayOfObjects,
}

/// Reads seed rows from a file holding a JSON array of flat objects.
pub fn load_rows(path: &Path) -> Result<TableData, JsonIoError> {
    let content = fs::read_to_string(path)?;
    parse_rows(&content)
}

pub fn parse_rows(content: &str) -> Result<TableData, JsonIoError> {
    let value: Value = serde_json::from_str(content)?;

    let Value::Array(items) = value else {
        return Err(JsonIoError::NotAnArray);
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map.into_iter().collect::<Row>()),
            _ => Err(JsonIoError::NotArrayOfObjects),
        })
        .collect()
}
