use std::fmt;
use std::rc::Rc;

use serde_json::Value;
use thiserror::Error;

use crate::state::data_model::{self, Row, TableData};

pub const DEFAULT_ID_FIELD: &str = "id";

/// Stable identity of a row, fixed when the row enters the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowId {
    /// Taken from the row's own identifier field.
    Intrinsic(String),
    /// Assigned by the store for rows without one. Never reused.
    Generated(u64),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Intrinsic(id) => write!(f, "id-{id}"),
            RowId::Generated(n) => write!(f, "gen-{n}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowRef<'a> {
    Id(&'a RowId),
    Index(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowStoreError {
    #[error("duplicate row identifier '{id}'")]
    DuplicateRowId { id: String },
}

#[derive(Clone, Debug)]
pub struct StoredRow {
    pub id: RowId,
    pub fields: Rc<Row>,
}

// Identity equality: an unchanged row keeps its `Rc`, which lets the renderer
// skip it without comparing fields.
impl PartialEq for StoredRow {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.fields, &other.fields)
    }
}

impl StoredRow {
    pub fn text(&self, column: &str) -> String {
        data_model::cell_text(&self.fields, column)
    }
}

#[derive(Clone, Debug)]
pub struct RowStore {
    rows: Vec<StoredRow>,
    id_field: String,
    next_generated: u64,
}

impl Default for RowStore {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            id_field: DEFAULT_ID_FIELD.to_string(),
            next_generated: 0,
        }
    }
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: TableData) -> Result<Self, RowStoreError> {
        Self::with_id_field(DEFAULT_ID_FIELD, rows)
    }

    pub fn with_id_field(id_field: &str, rows: TableData) -> Result<Self, RowStoreError> {
        let mut store = Self {
            id_field: id_field.to_string(),
            ..Self::default()
        };
        store.rows = store.ingest(rows)?;
        Ok(store)
    }

    /// Replaces every row. Equal content is a no-op so identities survive a
    /// caller echoing back the rows it was notified with.
    pub fn replace_rows(&mut self, rows: TableData) -> Result<bool, RowStoreError> {
        if self.matches(&rows) {
            return Ok(false);
        }

        let next = self.ingest(rows)?;
        self.rows = next;
        tracing::debug!(rows = self.rows.len(), "row store replaced");
        Ok(true)
    }

    /// True when the stored rows hold exactly `rows`, in order.
    pub fn matches(&self, rows: &[Row]) -> bool {
        self.rows.len() == rows.len()
            && self
                .rows
                .iter()
                .zip(rows)
                .all(|(stored, row)| stored.fields.as_ref() == row)
    }

    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    pub fn rows(&self) -> &[StoredRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn position(&self, id: &RowId) -> Option<usize> {
        self.rows.iter().position(|row| &row.id == id)
    }

    pub fn get(&self, id: &RowId) -> Option<&StoredRow> {
        self.rows.iter().find(|row| &row.id == id)
    }

    pub fn to_rows(&self) -> TableData {
        self.rows.iter().map(|row| row.fields.as_ref().clone()).collect()
    }

    pub fn update_cell(&mut self, target: RowRef<'_>, column: &str, value: Value) -> bool {
        let index = match target {
            RowRef::Id(id) => self.position(id),
            RowRef::Index(index) => (index < self.rows.len()).then_some(index),
        };
        let Some(index) = index else {
            tracing::trace!(?target, column, "update for unknown row ignored");
            return false;
        };

        let current = &self.rows[index];
        if current.fields.get(column) == Some(&value) {
            return false;
        }
        if column == self.id_field && matches!(current.id, RowId::Intrinsic(_)) {
            tracing::warn!(row = %current.id, column, "refusing to rewrite row identifier");
            return false;
        }

        let mut fields = current.fields.as_ref().clone();
        fields.insert(column.to_string(), value);
        let replacement = StoredRow {
            id: current.id.clone(),
            fields: Rc::new(fields),
        };

        let mut next = self.rows.clone();
        next[index] = replacement;
        self.rows = next;
        true
    }

    pub fn push_row(&mut self, row: Row) -> Result<RowId, RowStoreError> {
        let id = self.assign_id(&row);
        if let RowId::Intrinsic(value) = &id {
            if self.position(&id).is_some() {
                return Err(RowStoreError::DuplicateRowId { id: value.clone() });
            }
        }

        self.rows.push(StoredRow {
            id: id.clone(),
            fields: Rc::new(row),
        });
        Ok(id)
    }

    pub fn remove_row(&mut self, id: &RowId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.rows.remove(index);
        true
    }

    fn ingest(&mut self, rows: TableData) -> Result<Vec<StoredRow>, RowStoreError> {
        let mut stored: Vec<StoredRow> = Vec::with_capacity(rows.len());
        for row in rows {
            let id = self.assign_id(&row);
            if let RowId::Intrinsic(value) = &id {
                if stored.iter().any(|existing| existing.id == id) {
                    return Err(RowStoreError::DuplicateRowId { id: value.clone() });
                }
            }
            stored.push(StoredRow {
                id,
                fields: Rc::new(row),
            });
        }
        Ok(stored)
    }

    fn assign_id(&mut self, row: &Row) -> RowId {
        match row.get(&self.id_field) {
            Some(value) if !value.is_null() => RowId::Intrinsic(data_model::display_value(value)),
            _ => {
                let id = RowId::Generated(self.next_generated);
                self.next_generated += 1;
                id
            }
        }
    }
}
