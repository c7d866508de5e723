//! Record importers for employees, projects and tasks.
//!
//! # Responsibility
//! - Turn header-driven source rows into validated, deduplicated entities.
//! - Resolve supervisor references once all employee rows are known.
//!
//! # Invariants
//! - Row-level failures never abort an import; only an unreadable source does.
//! - The first row with a given natural key wins; later duplicates are dropped.
//! - Project and task rows that fail validation are reported via `log`;
//!   employee rows without first name and all duplicates are dropped silently.

pub mod csv_source;
pub mod date;
pub mod employees;
pub mod projects;
pub mod record;
pub mod supervisors;
pub mod tasks;

use crate::model::EntityValidationError;
use crate::repo::catalog::{Catalog, CatalogEntry};
use log::warn;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub use csv_source::{read_csv, read_csv_file};
pub use date::parse_start_date;
pub use employees::import_employees;
pub use projects::import_projects;
pub use record::SourceRecord;
pub use tasks::import_tasks;

pub type ImportResult<T> = Result<T, ImportError>;

/// Source-level failure that aborts one import.
#[derive(Debug)]
pub enum ImportError {
    /// The source file is missing or cannot be opened.
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The source could be opened but not read as CSV.
    Csv(csv::Error),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceUnavailable { path, source } => {
                write!(f, "cannot open data source `{}`: {source}", path.display())
            }
            Self::Csv(err) => write!(f, "cannot read CSV data: {err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SourceUnavailable { source, .. } => Some(source),
            Self::Csv(err) => Some(err),
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Reason a single row was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    Entity(EntityValidationError),
    /// Start date matches none of the accepted layouts.
    UnknownDateFormat(String),
    /// Start date matches a layout but names no real calendar day.
    InvalidCalendarDate(String),
}

impl Display for RowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entity(err) => write!(f, "{err}"),
            Self::UnknownDateFormat(value) => write!(f, "unknown date format: `{value}`"),
            Self::InvalidCalendarDate(value) => write!(f, "invalid calendar date: `{value}`"),
        }
    }
}

impl Error for RowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Entity(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EntityValidationError> for RowError {
    fn from(value: EntityValidationError) -> Self {
        Self::Entity(value)
    }
}

/// Per-import row accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub rows_read: usize,
    pub accepted: usize,
    pub skipped_invalid: usize,
    pub skipped_duplicate: usize,
    /// Accepted rows whose reference never matched an imported entity.
    pub unresolved_references: usize,
}

/// Import output: the entity catalog plus its report.
#[derive(Debug, Clone)]
pub struct Imported<T: CatalogEntry> {
    pub catalog: Catalog<T>,
    pub report: ImportReport,
}

/// Shared accept/dedup step for project and task rows.
fn accept_row<T: CatalogEntry>(
    entity: &'static str,
    row: usize,
    parsed: Result<T, RowError>,
    catalog: &mut Catalog<T>,
    report: &mut ImportReport,
) {
    report.rows_read += 1;
    match parsed {
        Ok(entry) => {
            if catalog.insert_if_absent(entry) {
                report.accepted += 1;
            } else {
                report.skipped_duplicate += 1;
            }
        }
        Err(err) => {
            report.skipped_invalid += 1;
            warn!(
                "event=row_skipped module=import status=error entity={} row={} error={}",
                entity,
                row,
                err
            );
        }
    }
}
