//! Runtime configuration.
//!
//! Built from defaults, then an optional JSON file named by `SHOWCASE_CONFIG`,
//! then individual environment overrides:
//!
//! - `SHOWCASE_LANG`: `en` or `vi`
//! - `SHOWCASE_PAGE_SIZE`: 10, 20, 30 or 50
//! - `SHOWCASE_TOAST_MS`: toast auto-dismiss delay in milliseconds
//! - `SHOWCASE_ROWS`: JSON file with the table's seed rows
//! - `SHOWCASE_LOG`: tracing filter used when `RUST_LOG` is unset

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::state::i18n::Language;
use crate::state::table_engine::PageSize;
use crate::state::toast::DEFAULT_TOAST_DURATION;

pub const DEFAULT_LOG_FILTER: &str = "showcase=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unsupported page size '{0}' (expected 10, 20, 30 or 50)")]
    InvalidPageSize(String),
    #[error("unknown language code '{0}'")]
    InvalidLanguage(String),
    #[error("invalid toast duration '{0}'")]
    InvalidDuration(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub language: Language,
    pub page_size: PageSize,
    pub toast_duration: Duration,
    pub rows_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            page_size: PageSize::default(),
            toast_duration: DEFAULT_TOAST_DURATION,
            rows_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Shape of the optional JSON config file. Every field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    language: Option<String>,
    page_size: Option<usize>,
    toast_ms: Option<u64>,
    rows: Option<PathBuf>,
    log: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("SHOWCASE_CONFIG") {
            let path = PathBuf::from(path);
            let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            let file: FileConfig = serde_json::from_str(&content)
                .map_err(|source| ConfigError::Parse { path, source })?;
            config.apply_file(file)?;
        }

        if let Some(code) = lookup("SHOWCASE_LANG") {
            config.language = parse_language(&code)?;
        }
        if let Some(size) = lookup("SHOWCASE_PAGE_SIZE") {
            let parsed = size
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidPageSize(size.clone()))?;
            config.page_size = parse_page_size(parsed)?;
        }
        if let Some(ms) = lookup("SHOWCASE_TOAST_MS") {
            let millis = ms
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDuration(ms.clone()))?;
            config.toast_duration = Duration::from_millis(millis);
        }
        if let Some(rows) = lookup("SHOWCASE_ROWS") {
            config.rows_path = Some(PathBuf::from(rows));
        }
        if let Some(filter) = lookup("SHOWCASE_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) -> Result<(), ConfigError> {
        if let Some(code) = file.language {
            self.language = parse_language(&code)?;
        }
        if let Some(size) = file.page_size {
            self.page_size = parse_page_size(size)?;
        }
        if let Some(ms) = file.toast_ms {
            self.toast_duration = Duration::from_millis(ms);
        }
        if let Some(rows) = file.rows {
            self.rows_path = Some(rows);
        }
        if let Some(log) = file.log {
            self.log_filter = log;
        }
        Ok(())
    }
}

fn parse_language(code: &str) -> Result<Language, ConfigError> {
    Language::from_code(code.trim()).ok_or_else(|| ConfigError::InvalidLanguage(code.to_string()))
}

fn parse_page_size(size: usize) -> Result<PageSize, ConfigError> {
    PageSize::try_from(size).map_err(|size| ConfigError::InvalidPageSize(size.to_string()))
}
