use serde_json::Value;

use crate::state::columns::ColumnDef;
use crate::state::data_model;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellEditState {
    /// Read-only column; no edit state is kept.
    Viewing,
    Clean,
    Dirty,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CommitOutcome {
    Committed(Value),
    Unchanged,
    Rejected(String),
}

/// Draft and validation state of one editable cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellEditController {
    committed: Value,
    draft: String,
    error: Option<String>,
}

impl CellEditController {
    pub fn new(committed: Value) -> Self {
        let draft = data_model::display_value(&committed);
        Self {
            committed,
            draft,
            error: None,
        }
    }

    /// Allocates a controller only for editable columns.
    pub fn for_column(column: &ColumnDef, committed: Value) -> Option<Self> {
        column.editable.then(|| Self::new(committed))
    }

    pub fn state_of(controller: Option<&Self>) -> CellEditState {
        match controller {
            None => CellEditState::Viewing,
            Some(ctl) if ctl.is_dirty() => CellEditState::Dirty,
            Some(_) => CellEditState::Clean,
        }
    }

    pub fn committed(&self) -> &Value {
        &self.committed
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != data_model::display_value(&self.committed)
    }

    pub fn input(&mut self, text: String) {
        self.draft = text;
        self.error = None;
    }

    pub fn commit(&mut self, column: &ColumnDef) -> CommitOutcome {
        if let Some(message) = column.validate(&self.draft) {
            self.error = Some(message.clone());
            return CommitOutcome::Rejected(message);
        }

        self.error = None;
        if !self.is_dirty() {
            return CommitOutcome::Unchanged;
        }

        let value = data_model::coerce_input(&self.draft, &self.committed);
        self.draft = data_model::display_value(&value);
        self.committed = value.clone();
        CommitOutcome::Committed(value)
    }

    pub fn cancel(&mut self) {
        self.draft = data_model::display_value(&self.committed);
        self.error = None;
    }

    /// The stored value changed from outside; it wins over any draft.
    pub fn sync_committed(&mut self, value: Value) {
        if value == self.committed {
            return;
        }
        self.draft = data_model::display_value(&value);
        self.committed = value;
        self.error = None;
    }
}
