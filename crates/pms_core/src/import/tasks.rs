//! Task row importer.

use super::record::SourceRecord;
use super::{accept_row, ImportReport, Imported, RowError};
use crate::model::task::Task;
use crate::repo::catalog::Catalog;

pub const FIELD_NAME: &str = "Name";
pub const FIELD_DESCRIPTION: &str = "Description";
pub const FIELD_ESTIMATED_HOURS: &str = "Estimated Hours";

/// Imports task rows in source order.
///
/// Rows with an empty name are skipped and reported; an absent or malformed
/// hour estimate defaults to `0`. Signed estimates are accepted as given.
pub fn import_tasks<I>(records: I) -> Imported<Task>
where
    I: IntoIterator<Item = SourceRecord>,
{
    let mut catalog = Catalog::new();
    let mut report = ImportReport::default();

    for (index, record) in records.into_iter().enumerate() {
        accept_row("task", index + 1, parse_task(&record), &mut catalog, &mut report);
    }

    Imported { catalog, report }
}

/// Validates one row into a task.
pub fn parse_task(record: &SourceRecord) -> Result<Task, RowError> {
    let estimated_hours = record.field(FIELD_ESTIMATED_HOURS).parse().unwrap_or(0);
    Ok(Task::new(
        record.field(FIELD_NAME),
        record.field(FIELD_DESCRIPTION),
        estimated_hours,
    )?)
}

#[cfg(test)]
mod tests {
    use super::{import_tasks, parse_task};
    use crate::import::{RowError, SourceRecord};
    use crate::model::EntityValidationError;

    fn row(name: &str, description: &str, hours: &str) -> SourceRecord {
        SourceRecord::new()
            .with_field("Name", name)
            .with_field("Description", description)
            .with_field("Estimated Hours", hours)
    }

    #[test]
    fn description_is_trimmed_verbatim() {
        let task = parse_task(&row("Docs", "  Write the   guide ", "20")).unwrap();
        assert_eq!(task.description(), "Write the   guide");
    }

    #[test]
    fn bad_hours_default_to_zero() {
        for hours in ["", "soon", "1.5", "12h"] {
            let task = parse_task(&row("T", "", hours)).unwrap();
            assert_eq!(task.estimated_days(), 0.0, "hours: {hours:?}");
        }
    }

    #[test]
    fn signed_hours_are_accepted() {
        let task = parse_task(&row("Fix", "", "-12")).unwrap();
        assert_eq!(task.estimated_hours(), -12);
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = parse_task(&SourceRecord::new()).unwrap_err();
        assert_eq!(err, RowError::Entity(EntityValidationError::EmptyName));
    }

    #[test]
    fn first_occurrence_wins() {
        let imported = import_tasks(vec![row("Clean", "first", "72"), row("Clean", "second", "1")]);
        assert_eq!(imported.catalog.len(), 1);
        let task = imported.catalog.find_by_key("Clean").unwrap();
        assert_eq!(task.description(), "first");
        assert_eq!(imported.report.skipped_duplicate, 1);
    }
}
