use serde_json::Value;

use showcase::state::cell_edit::{CellEditController, CellEditState, CommitOutcome};
use showcase::state::columns::{self, ColumnDef};

fn name_column() -> ColumnDef {
    ColumnDef::text("name", "Name").with_validator(columns::required("Required"))
}

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

#[test]
fn test_new_controller_is_clean() {
    let controller = CellEditController::new(text("A"));
    assert_eq!(controller.draft(), "A");
    assert_eq!(controller.error(), None);
    assert_eq!(CellEditController::state_of(Some(&controller)), CellEditState::Clean);
}

#[test]
fn test_read_only_column_has_no_controller() {
    let column = ColumnDef::text("id", "ID").read_only();
    let controller = CellEditController::for_column(&column, text("1"));
    assert!(controller.is_none());
    assert_eq!(CellEditController::state_of(controller.as_ref()), CellEditState::Viewing);

    let checkbox = ColumnDef::checkbox("select_flag", "Select");
    assert!(CellEditController::for_column(&checkbox, text("")).is_none());
}

#[test]
fn test_input_makes_dirty_and_clears_error() {
    let column = name_column();
    let mut controller = CellEditController::new(text("A"));

    controller.input(String::new());
    assert_eq!(controller.commit(&column), CommitOutcome::Rejected("Required".to_string()));
    assert_eq!(controller.error(), Some("Required"));

    controller.input("B".to_string());
    assert!(controller.is_dirty());
    assert_eq!(controller.error(), None);
    assert_eq!(CellEditController::state_of(Some(&controller)), CellEditState::Dirty);
}

#[test]
fn test_commit_accepts_and_returns_to_clean() {
    let column = name_column();
    let mut controller = CellEditController::new(text("A"));
    controller.input("B".to_string());

    assert_eq!(controller.commit(&column), CommitOutcome::Committed(text("B")));
    assert_eq!(controller.committed(), &text("B"));
    assert!(!controller.is_dirty());
}

#[test]
fn test_commit_twice_is_unchanged() {
    let column = name_column();
    let mut controller = CellEditController::new(text("A"));
    controller.input("B".to_string());

    assert!(matches!(controller.commit(&column), CommitOutcome::Committed(_)));
    assert_eq!(controller.commit(&column), CommitOutcome::Unchanged);
}

#[test]
fn test_commit_clean_draft_is_unchanged() {
    let mut controller = CellEditController::new(text("A"));
    assert_eq!(controller.commit(&name_column()), CommitOutcome::Unchanged);
}

#[test]
fn test_rejected_commit_keeps_committed_value() {
    let column = name_column();
    let mut controller = CellEditController::new(text("A"));
    controller.input("  ".to_string());

    assert!(matches!(controller.commit(&column), CommitOutcome::Rejected(_)));
    assert_eq!(controller.committed(), &text("A"));
    assert_eq!(controller.draft(), "  ");
}

#[test]
fn test_validator_runs_even_when_clean() {
    let column = name_column();
    let mut controller = CellEditController::new(text(""));
    assert_eq!(controller.commit(&column), CommitOutcome::Rejected("Required".to_string()));
}

#[test]
fn test_cancel_restores_committed_text() {
    let mut controller = CellEditController::new(text("A"));
    controller.input("X".to_string());
    controller.cancel();

    assert_eq!(controller.draft(), "A");
    assert_eq!(controller.error(), None);
    assert_eq!(CellEditController::state_of(Some(&controller)), CellEditState::Clean);
}

#[test]
fn test_cancel_clears_error() {
    let column = name_column();
    let mut controller = CellEditController::new(text("A"));
    controller.input(String::new());
    controller.commit(&column);
    controller.cancel();
    assert_eq!(controller.error(), None);
    assert_eq!(controller.draft(), "A");
}

#[test]
fn test_commit_keeps_number_type() {
    let column = ColumnDef::text("age", "Age");
    let mut controller = CellEditController::new(Value::Number(30.into()));
    assert_eq!(controller.draft(), "30");

    controller.input("31".to_string());
    assert_eq!(controller.commit(&column), CommitOutcome::Committed(Value::Number(31.into())));

    controller.input("thirty".to_string());
    assert_eq!(controller.commit(&column), CommitOutcome::Committed(text("thirty")));
}

#[test]
fn test_sync_committed_overrides_draft() {
    let mut controller = CellEditController::new(text("A"));
    controller.input("draft".to_string());

    controller.sync_committed(text("Z"));
    assert_eq!(controller.committed(), &text("Z"));
    assert_eq!(controller.draft(), "Z");
    assert!(!controller.is_dirty());
}

#[test]
fn test_sync_with_same_value_keeps_draft() {
    let mut controller = CellEditController::new(text("A"));
    controller.input("draft".to_string());

    controller.sync_committed(text("A"));
    assert_eq!(controller.draft(), "draft");
    assert!(controller.is_dirty());
}

#[test]
fn test_null_committed_displays_empty() {
    let column = ColumnDef::text("email", "Email");
    let mut controller = CellEditController::new(Value::Null);
    assert_eq!(controller.draft(), "");
    assert_eq!(controller.commit(&column), CommitOutcome::Unchanged);
    assert_eq!(controller.committed(), &Value::Null);
}
