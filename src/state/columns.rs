use std::fmt;
use std::rc::Rc;

use crate::state::i18n::{self, Language};

/// Maps a candidate cell text to an error message, or `None` when valid.
pub type Validator = Rc<dyn Fn(&str) -> Option<String>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnKind {
    #[default]
    Text,
    /// Stores `"1"` when checked and `""` otherwise.
    Checkbox,
}

#[derive(Clone)]
pub struct ColumnDef {
    pub key: String,
    pub header: String,
    pub editable: bool,
    pub kind: ColumnKind,
    pub validator: Option<Validator>,
}

impl ColumnDef {
    pub fn text(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            editable: true,
            kind: ColumnKind::Text,
            validator: None,
        }
    }

    pub fn checkbox(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            editable: false,
            kind: ColumnKind::Checkbox,
            ..Self::text(key, header)
        }
    }

    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn validate(&self, candidate: &str) -> Option<String> {
        self.validator.as_ref().and_then(|validate| validate(candidate))
    }
}

// Validators compare by identity; a rebuilt closure is a different column.
impl PartialEq for ColumnDef {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.header == other.header
            && self.editable == other.editable
            && self.kind == other.kind
            && match (&self.validator, &other.validator) {
                (None, None) => true,
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("editable", &self.editable)
            .field("kind", &self.kind)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Rejects text that is empty after trimming.
pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Rc::new(move |candidate: &str| candidate.trim().is_empty().then(|| message.clone()))
}

/// Column set of the showcase table, with headers and the name validator's
/// message in `language`. Each call builds fresh validators, so callers
/// memoize it per language.
pub fn localized_columns(language: Language) -> Rc<[ColumnDef]> {
    let header = |key: &'static str| i18n::tr(language, key);
    let name_required = required(i18n::tr(language, "validation.name_required"));
    Rc::from(vec![
        ColumnDef::checkbox("select_flag", header("table.col.select")),
        ColumnDef::text("id", header("table.col.id")).read_only(),
        ColumnDef::text("name", header("table.col.name")).with_validator(name_required),
        ColumnDef::text("email", header("table.col.email")),
        ColumnDef::text("role", header("table.col.role")),
        ColumnDef::text("status", header("table.col.status")),
    ])
}
