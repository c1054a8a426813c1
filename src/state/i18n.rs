//! UI strings.
//!
//! Each language is one flat JSON catalog under `assets/i18n/`, compiled into
//! the binary. English is the reference catalog: a key missing from another
//! language falls back to it, and an unknown key renders as itself.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Vi,
}

struct CatalogSource {
    language: Language,
    code: &'static str,
    json: &'static str,
}

// Order is the order of the language picker.
static SOURCES: [CatalogSource; 2] = [
    CatalogSource {
        language: Language::En,
        code: "en",
        json: include_str!("../../assets/i18n/en.json"),
    },
    CatalogSource {
        language: Language::Vi,
        code: "vi",
        json: include_str!("../../assets/i18n/vi.json"),
    },
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog '{code}' is not a flat JSON object of strings: {source}")]
    Malformed {
        code: &'static str,
        source: serde_json::Error,
    },
}

type Catalog = BTreeMap<String, String>;

impl Language {
    pub fn all() -> impl Iterator<Item = Language> {
        SOURCES.iter().map(|source| source.language)
    }

    pub fn code(self) -> &'static str {
        source_of(self).code
    }

    pub fn from_code(code: &str) -> Option<Self> {
        SOURCES
            .iter()
            .find(|source| source.code == code)
            .map(|source| source.language)
    }

    /// Name of `self` as shown to a reader of `ui`.
    pub fn label(self, ui: Language) -> &'static str {
        lookup(ui, &format!("language.option.{}", self.code())).unwrap_or(self.code())
    }
}

pub fn tr(language: Language, key: &'static str) -> &'static str {
    lookup(language, key).unwrap_or(key)
}

/// Keys present in the English catalog but absent from `language`.
pub fn missing_keys(language: Language) -> Vec<&'static str> {
    let own = catalog(language);
    catalog(Language::En)
        .keys()
        .filter(|key| !own.contains_key(*key))
        .map(String::as_str)
        .collect()
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    catalog(language)
        .get(key)
        .or_else(|| catalog(Language::En).get(key))
        .map(String::as_str)
}

fn position_of(language: Language) -> usize {
    SOURCES
        .iter()
        .position(|source| source.language == language)
        .unwrap_or(0)
}

fn source_of(language: Language) -> &'static CatalogSource {
    &SOURCES[position_of(language)]
}

fn catalog(language: Language) -> &'static Catalog {
    static CATALOGS: OnceLock<Vec<Catalog>> = OnceLock::new();

    let catalogs = CATALOGS.get_or_init(|| {
        SOURCES
            .iter()
            .map(|source| {
                parse_catalog(source).unwrap_or_else(|err| {
                    tracing::error!(%err, "falling back to English strings");
                    Catalog::new()
                })
            })
            .collect()
    });
    &catalogs[position_of(language)]
}

fn parse_catalog(source: &CatalogSource) -> Result<Catalog, CatalogError> {
    serde_json::from_str(source.json).map_err(|err| CatalogError::Malformed {
        code: source.code,
        source: err,
    })
}
