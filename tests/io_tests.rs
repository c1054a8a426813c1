use serde_json::Value;

use showcase::io::json_io::{self, JsonIoError};

#[test]
fn test_load_rows_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.json");
    std::fs::write(
        &path,
        r#"[{"name":"Alice","age":30},{"name":"Bob","age":25}]"#,
    )
    .unwrap();

    let rows = json_io::load_rows(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], Value::String("Alice".to_string()));
    assert_eq!(rows[1]["age"], Value::Number(25.into()));
}

#[test]
fn test_load_rows_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    let rows = json_io::load_rows(&path).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_load_rows_not_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obj.json");
    std::fs::write(&path, r#"{"key": "value"}"#).unwrap();

    let err = json_io::load_rows(&path).unwrap_err();
    assert!(matches!(err, JsonIoError::NotAnArray));
}

#[test]
fn test_load_rows_not_objects() {
    let err = json_io::parse_rows("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, JsonIoError::NotArrayOfObjects));
}

#[test]
fn test_load_rows_invalid_json() {
    let err = json_io::parse_rows("[{").unwrap_err();
    assert!(matches!(err, JsonIoError::Parse(_)));
}

#[test]
fn test_load_rows_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = json_io::load_rows(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, JsonIoError::Io(_)));
    assert!(err.to_string().starts_with("IO error"));
}

#[test]
fn test_load_rows_fixture() {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("tests").join("data").join("people.json");
    let rows = json_io::load_rows(&path).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["role"], Value::String("Editor".to_string()));
}
