use std::rc::Rc;

use serde_json::Value;

use crate::state::cell_edit::{CellEditController, CommitOutcome};
use crate::state::columns::{ColumnDef, ColumnKind};
use crate::state::data_model::{Row, TableData};
use crate::state::row_store::{RowId, RowRef, RowStore, RowStoreError, StoredRow};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Thirty,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [Self::Ten, Self::Twenty, Self::Thirty, Self::Fifty];

    pub fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Thirty => 30,
            Self::Fifty => 50,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub index: usize,
    pub size: PageSize,
}

impl Pagination {
    pub fn page_count(&self, rows: usize) -> usize {
        rows.div_ceil(self.size.get()).max(1)
    }

    pub fn range(&self, rows: usize) -> std::ops::Range<usize> {
        let start = (self.index * self.size.get()).min(rows);
        let end = (start + self.size.get()).min(rows);
        start..end
    }
}

#[derive(Clone, Debug)]
pub struct TableEngine {
    store: RowStore,
    columns: Rc<[ColumnDef]>,
    pagination: Pagination,
}

impl TableEngine {
    pub fn new(rows: TableData, columns: Rc<[ColumnDef]>) -> Result<Self, RowStoreError> {
        Ok(Self::from_store(RowStore::from_rows(rows)?, columns))
    }

    pub fn from_store(store: RowStore, columns: Rc<[ColumnDef]>) -> Self {
        Self {
            store,
            columns,
            pagination: Pagination::default(),
        }
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn columns(&self) -> &Rc<[ColumnDef]> {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn set_columns(&mut self, columns: Rc<[ColumnDef]>) {
        self.columns = columns;
    }

    pub fn replace_rows(&mut self, rows: TableData) -> Result<bool, RowStoreError> {
        let replaced = self.store.replace_rows(rows)?;
        if replaced {
            self.clamp_page();
        }
        Ok(replaced)
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page_index(&self) -> usize {
        self.pagination.index
    }

    pub fn page_size(&self) -> PageSize {
        self.pagination.size
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.store.len())
    }

    pub fn page_rows(&self) -> &[StoredRow] {
        &self.store.rows()[self.pagination.range(self.store.len())]
    }

    pub fn can_previous(&self) -> bool {
        self.pagination.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.pagination.index + 1 < self.page_count()
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(0)
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.go_to_page(self.pagination.index - 1)
    }

    pub fn next_page(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.go_to_page(self.pagination.index + 1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.page_count() - 1)
    }

    /// Switches page size while keeping the first visible row on screen.
    pub fn set_page_size(&mut self, size: PageSize) {
        let first_row = self.pagination.index * self.pagination.size.get();
        self.pagination.size = size;
        self.pagination.index = first_row / size.get();
        self.clamp_page();
    }

    /// Runs the cell's commit protocol and applies an accepted value.
    /// Returns true when the store changed. When the store refuses the value
    /// the controller is reset to the stored one.
    pub fn commit_cell(
        &mut self,
        row: &RowId,
        column_key: &str,
        controller: &mut CellEditController,
    ) -> bool {
        let Some(column) = self.column(column_key) else {
            return false;
        };

        let previous = controller.committed().clone();
        match controller.commit(column) {
            CommitOutcome::Committed(value) => {
                let applied = self.store.update_cell(RowRef::Id(row), column_key, value);
                if applied {
                    tracing::debug!(%row, column = column_key, "cell committed");
                } else {
                    // The store refused the value; the cell falls back to what it holds.
                    let stored = match self.store.get(row) {
                        Some(stored) => {
                            stored.fields.get(column_key).cloned().unwrap_or(Value::Null)
                        }
                        None => previous,
                    };
                    tracing::debug!(%row, column = column_key, "cell commit refused by store");
                    controller.sync_committed(stored);
                }
                applied
            }
            CommitOutcome::Unchanged => false,
            CommitOutcome::Rejected(message) => {
                tracing::debug!(%row, column = column_key, %message, "cell commit rejected");
                false
            }
        }
    }

    pub fn update_cell(&mut self, row: RowRef<'_>, column_key: &str, value: Value) -> bool {
        self.store.update_cell(row, column_key, value)
    }

    pub fn toggle_checkbox(&mut self, row: &RowId, column_key: &str) -> bool {
        let Some(column) = self.column(column_key) else {
            return false;
        };
        if column.kind != ColumnKind::Checkbox {
            return false;
        }
        let Some(current) = self.store.get(row) else {
            return false;
        };

        let next = if current.text(column_key) == "1" { "" } else { "1" };
        self.store
            .update_cell(RowRef::Id(row), column_key, Value::String(next.to_string()))
    }

    /// An empty row for every column except the identifier, which the store
    /// generates.
    pub fn blank_row(&self) -> Row {
        self.columns
            .iter()
            .filter(|column| column.key != self.store.id_field())
            .map(|column| (column.key.clone(), Value::String(String::new())))
            .collect()
    }

    pub fn push_row(&mut self, row: Row) -> Result<RowId, RowStoreError> {
        self.store.push_row(row)
    }

    /// Removes every row whose `column_key` cell displays as `value`.
    pub fn remove_rows_where(&mut self, column_key: &str, value: &str) -> usize {
        let doomed: Vec<RowId> = self
            .store
            .rows()
            .iter()
            .filter(|row| row.text(column_key) == value)
            .map(|row| row.id.clone())
            .collect();

        let removed = doomed
            .iter()
            .filter(|id| self.store.remove_row(id))
            .count();
        if removed > 0 {
            self.clamp_page();
        }
        removed
    }

    fn go_to_page(&mut self, index: usize) -> bool {
        let index = index.min(self.page_count() - 1);
        if index == self.pagination.index {
            return false;
        }
        self.pagination.index = index;
        true
    }

    fn clamp_page(&mut self) {
        let last = self.page_count() - 1;
        if self.pagination.index > last {
            self.pagination.index = last;
        }
    }
}
