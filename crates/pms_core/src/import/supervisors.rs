//! Two-pass supervisor linking.
//!
//! During the row pass, a supervisor that is not yet known is parked here by
//! last name. Once every row has been read, [`PendingSupervisors::resolve`]
//! links all parked subordinates against the complete employee catalog in one
//! pass. Names that never match stay unlinked.

use crate::model::employee::Employee;
use crate::model::ids::EmployeeId;
use crate::repo::catalog::Catalog;
use log::debug;
use std::collections::HashMap;

/// Supervisor last name -> subordinates still waiting for that supervisor.
#[derive(Debug, Default)]
pub struct PendingSupervisors {
    waiting: HashMap<String, Vec<EmployeeId>>,
}

impl PendingSupervisors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks `subordinate` until `supervisor_last_name` can be looked up.
    pub fn defer(&mut self, subordinate: EmployeeId, supervisor_last_name: &str) {
        self.waiting
            .entry(supervisor_last_name.to_string())
            .or_default()
            .push(subordinate);
    }

    /// Number of parked subordinates.
    pub fn len(&self) -> usize {
        self.waiting.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Links every parked subordinate whose supervisor now exists.
    ///
    /// Returns how many subordinates stayed unresolved.
    pub fn resolve(self, employees: &mut Catalog<Employee>) -> usize {
        let mut unresolved = 0;
        for (supervisor_last_name, subordinates) in self.waiting {
            let supervisor = employees
                .find_by_key(&supervisor_last_name)
                .map(Employee::id);
            let Some(supervisor) = supervisor else {
                debug!(
                    "event=supervisor_unresolved module=import status=skip supervisor={} subordinates={}",
                    supervisor_last_name,
                    subordinates.len()
                );
                unresolved += subordinates.len();
                continue;
            };

            for subordinate in subordinates {
                if let Some(employee) = employees.get_mut(subordinate) {
                    employee.set_supervisor(Some(supervisor));
                }
            }
        }
        unresolved
    }
}

#[cfg(test)]
mod tests {
    use super::PendingSupervisors;
    use crate::model::employee::Employee;
    use crate::model::ids::EmployeeId;
    use crate::repo::catalog::Catalog;

    #[test]
    fn all_subordinates_of_a_late_supervisor_are_linked() {
        let mut employees: Catalog<Employee> = [("A", "Ant"), ("B", "Bee"), ("C", "Boss")]
            .iter()
            .map(|(first, last)| Employee::new(*first, *last).unwrap())
            .collect();

        let mut pending = PendingSupervisors::new();
        pending.defer(EmployeeId::from_key("Ant"), "Boss");
        pending.defer(EmployeeId::from_key("Bee"), "Boss");
        pending.defer(EmployeeId::from_key("Boss"), "Nobody");
        assert_eq!(pending.len(), 3);

        assert_eq!(pending.resolve(&mut employees), 1);
        let boss = Some(EmployeeId::from_key("Boss"));
        assert_eq!(employees.find_by_key("Ant").unwrap().supervisor(), boss);
        assert_eq!(employees.find_by_key("Bee").unwrap().supervisor(), boss);
        assert_eq!(employees.find_by_key("Boss").unwrap().supervisor(), None);
    }
}
