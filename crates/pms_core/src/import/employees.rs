//! Employee row importer.
//!
//! Employees are deduplicated by last name. The `Supervisor` field names the
//! supervisor's last name; it is linked immediately when that employee was
//! already read, otherwise after the last row via [`PendingSupervisors`].

use super::record::SourceRecord;
use super::supervisors::PendingSupervisors;
use super::{ImportReport, Imported};
use crate::model::employee::Employee;
use crate::repo::catalog::Catalog;

pub const FIELD_FIRST_NAME: &str = "First Name";
pub const FIELD_LAST_NAME: &str = "Last Name";
pub const FIELD_SUPERVISOR: &str = "Supervisor";

/// Imports employee rows and resolves supervisor references.
///
/// Rows without first name and duplicate last names are dropped silently.
/// An empty `Supervisor` field means the employee has no supervisor.
pub fn import_employees<I>(records: I) -> Imported<Employee>
where
    I: IntoIterator<Item = SourceRecord>,
{
    let mut catalog: Catalog<Employee> = Catalog::new();
    let mut report = ImportReport::default();
    let mut pending = PendingSupervisors::new();

    for record in records {
        report.rows_read += 1;

        let Ok(mut employee) =
            Employee::new(record.field(FIELD_FIRST_NAME), record.field(FIELD_LAST_NAME))
        else {
            report.skipped_invalid += 1;
            continue;
        };
        if catalog.contains(employee.id()) {
            report.skipped_duplicate += 1;
            continue;
        }

        let supervisor_last_name = record.field(FIELD_SUPERVISOR);
        if !supervisor_last_name.is_empty() {
            match catalog.find_by_key(supervisor_last_name) {
                Some(supervisor) => employee.set_supervisor(Some(supervisor.id())),
                None => pending.defer(employee.id(), supervisor_last_name),
            }
        }

        catalog.insert_if_absent(employee);
        report.accepted += 1;
    }

    report.unresolved_references = pending.resolve(&mut catalog);
    Imported { catalog, report }
}
