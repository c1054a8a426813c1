use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use proptest::prelude::*;
use serde_json::Value;

use showcase::state::data_model::{Row, TableData};
use showcase::state::row_store::{RowId, RowRef, RowStore, RowStoreError};

fn person(id: i64, name: &str) -> Row {
    BTreeMap::from([
        ("id".to_string(), Value::Number(id.into())),
        ("name".to_string(), Value::String(name.to_string())),
    ])
}

fn anonymous(name: &str) -> Row {
    BTreeMap::from([("name".to_string(), Value::String(name.to_string()))])
}

fn sample_store() -> RowStore {
    RowStore::from_rows(vec![person(1, "Alice"), person(2, "Bob"), person(3, "Carol")]).unwrap()
}

fn ids(store: &RowStore) -> Vec<RowId> {
    store.rows().iter().map(|row| row.id.clone()).collect()
}

#[test]
fn test_intrinsic_ids_taken_from_id_field() {
    let store = sample_store();
    assert_eq!(
        ids(&store),
        vec![
            RowId::Intrinsic("1".to_string()),
            RowId::Intrinsic("2".to_string()),
            RowId::Intrinsic("3".to_string()),
        ]
    );
}

#[test]
fn test_generated_ids_for_rows_without_id() {
    let store = RowStore::from_rows(vec![anonymous("Alice"), anonymous("Bob")]).unwrap();
    assert_eq!(ids(&store), vec![RowId::Generated(0), RowId::Generated(1)]);
}

#[test]
fn test_null_id_counts_as_missing() {
    let mut row = anonymous("Alice");
    row.insert("id".to_string(), Value::Null);
    let store = RowStore::from_rows(vec![row]).unwrap();
    assert_eq!(ids(&store), vec![RowId::Generated(0)]);
}

#[test]
fn test_custom_id_field() {
    let row = BTreeMap::from([("code".to_string(), Value::String("X1".to_string()))]);
    let store = RowStore::with_id_field("code", vec![row]).unwrap();
    assert_eq!(store.id_field(), "code");
    assert_eq!(ids(&store), vec![RowId::Intrinsic("X1".to_string())]);
}

#[test]
fn test_duplicate_intrinsic_id_rejected() {
    let err = RowStore::from_rows(vec![person(1, "Alice"), person(1, "Alias")]).unwrap_err();
    assert_eq!(
        err,
        RowStoreError::DuplicateRowId {
            id: "1".to_string()
        }
    );
}

#[test]
fn test_update_cell_replaces_only_target_row() {
    let mut store = sample_store();
    let before = store.rows().to_vec();
    let target = RowId::Intrinsic("2".to_string());

    assert!(store.update_cell(RowRef::Id(&target), "name", Value::String("Bobby".to_string())));

    let after = store.rows();
    assert_eq!(after.len(), before.len());
    assert!(Rc::ptr_eq(&before[0].fields, &after[0].fields));
    assert!(Rc::ptr_eq(&before[2].fields, &after[2].fields));
    assert!(!Rc::ptr_eq(&before[1].fields, &after[1].fields));
    assert_eq!(after[1].id, target);
    assert_eq!(after[1].fields["name"], Value::String("Bobby".to_string()));
    assert_eq!(after[1].fields["id"], Value::Number(2.into()));
    // the previous row object is untouched
    assert_eq!(before[1].fields["name"], Value::String("Bob".to_string()));
}

#[test]
fn test_update_cell_by_index() {
    let mut store = sample_store();
    assert!(store.update_cell(RowRef::Index(0), "name", Value::String("Zed".to_string())));
    assert_eq!(store.rows()[0].text("name"), "Zed");
}

#[test]
fn test_update_cell_adds_missing_field() {
    let mut store = sample_store();
    assert!(store.update_cell(RowRef::Index(0), "email", Value::String("a@x.io".to_string())));
    assert_eq!(store.rows()[0].text("email"), "a@x.io");
}

#[test]
fn test_update_unknown_row_is_noop() {
    let mut store = sample_store();
    let before = store.rows().to_vec();

    let missing = RowId::Intrinsic("99".to_string());
    assert!(!store.update_cell(RowRef::Id(&missing), "name", Value::String("X".to_string())));
    assert!(!store.update_cell(RowRef::Index(3), "name", Value::String("X".to_string())));
    assert_eq!(store.rows(), before.as_slice());
}

#[test]
fn test_update_with_same_value_is_noop() {
    let mut store = sample_store();
    let before = store.rows().to_vec();
    assert!(!store.update_cell(RowRef::Index(0), "name", Value::String("Alice".to_string())));
    assert_eq!(store.rows(), before.as_slice());
}

#[test]
fn test_update_refuses_intrinsic_id_rewrite() {
    let mut store = sample_store();
    assert!(!store.update_cell(RowRef::Index(0), "id", Value::Number(2.into())));
    assert_eq!(store.rows()[0].fields["id"], Value::Number(1.into()));
}

#[test]
fn test_replace_rows_with_equal_content_keeps_identity() {
    let mut store = sample_store();
    let before = store.rows().to_vec();

    assert!(!store.replace_rows(store.to_rows()).unwrap());
    assert_eq!(store.rows(), before.as_slice());
}

#[test]
fn test_replace_rows_with_new_content() {
    let mut store = sample_store();
    assert!(store.replace_rows(vec![person(7, "Gina")]).unwrap());
    assert_eq!(ids(&store), vec![RowId::Intrinsic("7".to_string())]);
}

#[test]
fn test_replace_rows_rejects_duplicates_and_keeps_old_rows() {
    let mut store = sample_store();
    let before = store.rows().to_vec();
    let err = store
        .replace_rows(vec![person(5, "E"), person(5, "F")])
        .unwrap_err();
    assert!(matches!(err, RowStoreError::DuplicateRowId { .. }));
    assert_eq!(store.rows(), before.as_slice());
}

#[test]
fn test_push_and_remove_rows() {
    let mut store = sample_store();
    let id = store.push_row(anonymous("Dan")).unwrap();
    assert_eq!(id, RowId::Generated(0));
    assert_eq!(store.len(), 4);

    assert!(store.push_row(person(1, "Again")).is_err());

    assert!(store.remove_row(&id));
    assert!(!store.remove_row(&id));
    assert_eq!(store.len(), 3);

    // generated ids are never reused
    assert_eq!(store.push_row(anonymous("Eve")).unwrap(), RowId::Generated(1));
}

#[test]
fn test_to_rows_snapshot() {
    let store = sample_store();
    let rows: TableData = store.to_rows();
    assert_eq!(rows, vec![person(1, "Alice"), person(2, "Bob"), person(3, "Carol")]);
}

#[derive(Clone, Debug)]
enum Op {
    Push(Option<i64>),
    Remove(usize),
    Update(usize, String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        proptest::option::of(0i64..20).prop_map(Op::Push),
        (0usize..30).prop_map(Op::Remove),
        (0usize..30, "[a-z]{0,4}").prop_map(|(index, name)| Op::Update(index, name)),
    ]
}

proptest! {
    #[test]
    fn prop_ids_stay_unique(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let mut store = RowStore::new();
        for op in ops {
            match op {
                Op::Push(Some(id)) => { let _ = store.push_row(person(id, "p")); }
                Op::Push(None) => { store.push_row(anonymous("p")).unwrap(); }
                Op::Remove(index) => {
                    if let Some(row) = store.rows().get(index).cloned() {
                        store.remove_row(&row.id);
                    }
                }
                Op::Update(index, name) => {
                    store.update_cell(RowRef::Index(index), "name", Value::String(name));
                }
            }
            let unique: BTreeSet<RowId> = ids(&store).into_iter().collect();
            prop_assert_eq!(unique.len(), store.len());
        }
    }

    #[test]
    fn prop_update_changes_exactly_one_field(
        names in proptest::collection::vec("[a-z]{1,6}", 1..15),
        target in 0usize..15,
        value in "[A-Z]{1,6}",
    ) {
        let rows: TableData = names
            .iter()
            .enumerate()
            .map(|(i, name)| person(i as i64, name))
            .collect();
        let mut store = RowStore::from_rows(rows.clone()).unwrap();
        let before = store.rows().to_vec();
        let target = target % rows.len();

        store.update_cell(RowRef::Index(target), "name", Value::String(value.clone()));

        let after = store.rows();
        prop_assert_eq!(after.len(), before.len());
        for (index, (old, new)) in before.iter().zip(after).enumerate() {
            prop_assert_eq!(&old.id, &new.id);
            if index == target {
                prop_assert_eq!(new.text("name"), value.clone());
                prop_assert_eq!(&new.fields["id"], &old.fields["id"]);
            } else {
                prop_assert!(Rc::ptr_eq(&old.fields, &new.fields));
            }
        }
    }
}
