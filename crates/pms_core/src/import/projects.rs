//! Project row importer.

use super::date::parse_start_date;
use super::record::SourceRecord;
use super::{accept_row, ImportReport, Imported, RowError};
use crate::model::project::Project;
use crate::model::EntityValidationError;
use crate::repo::catalog::Catalog;

pub const FIELD_NAME: &str = "Name";
pub const FIELD_START_DATE: &str = "Start Date";
pub const FIELD_BUFFER: &str = "Buffer";

/// Imports project rows in source order.
///
/// Rows with an empty name or an unusable start date are skipped and
/// reported; an absent or malformed buffer defaults to `0`.
pub fn import_projects<I>(records: I) -> Imported<Project>
where
    I: IntoIterator<Item = SourceRecord>,
{
    let mut catalog = Catalog::new();
    let mut report = ImportReport::default();

    for (index, record) in records.into_iter().enumerate() {
        accept_row(
            "project",
            index + 1,
            parse_project(&record),
            &mut catalog,
            &mut report,
        );
    }

    Imported { catalog, report }
}

/// Validates one row into a project.
pub fn parse_project(record: &SourceRecord) -> Result<Project, RowError> {
    let name = record.field(FIELD_NAME);
    if name.is_empty() {
        return Err(EntityValidationError::EmptyName.into());
    }
    let start_date = parse_start_date(record.field(FIELD_START_DATE))?;
    let buffer = parse_buffer(record.field(FIELD_BUFFER));
    Ok(Project::new(name, start_date, buffer)?)
}

fn parse_buffer(value: &str) -> u32 {
    value.parse().unwrap_or(0)
}
