//! Employee domain model.
//!
//! # Invariants
//! - `first_name` is non-empty; `last_name` is the natural key and may be empty.
//! - At most `MAX_PROJECTS_PER_EMPLOYEE` projects, kept in assignment order.
//! - `supervisor` is a lookup relation only; it never owns the referenced employee.

use super::ids::{EmployeeId, ProjectId};
use super::EntityValidationError;
use serde::Serialize;

/// Project capacity of one employee.
pub const MAX_PROJECTS_PER_EMPLOYEE: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    id: EmployeeId,
    first_name: String,
    last_name: String,
    supervisor: Option<EmployeeId>,
    projects: Vec<ProjectId>,
}

impl Employee {
    /// Creates an employee without supervisor or projects.
    ///
    /// # Errors
    /// - `EmptyFirstName` when `first_name` is blank.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, EntityValidationError> {
        let first_name = first_name.into().trim().to_string();
        if first_name.is_empty() {
            return Err(EntityValidationError::EmptyFirstName);
        }
        let last_name = last_name.into().trim().to_string();

        Ok(Self {
            id: EmployeeId::from_key(&last_name),
            first_name,
            last_name,
            supervisor: None,
            projects: Vec::with_capacity(MAX_PROJECTS_PER_EMPLOYEE),
        })
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn supervisor(&self) -> Option<EmployeeId> {
        self.supervisor
    }

    /// Assigned project ids in assignment order.
    pub fn projects(&self) -> &[ProjectId] {
        &self.projects
    }

    /// Appends a project unless the employee is already at capacity.
    ///
    /// Returns `false` and leaves the list untouched when full.
    #[must_use]
    pub fn assign_project(&mut self, project_id: ProjectId) -> bool {
        if self.projects.len() >= MAX_PROJECTS_PER_EMPLOYEE {
            return false;
        }
        self.projects.push(project_id);
        true
    }

    /// Removes the first occurrence of `project_id`; no-op when absent.
    pub fn remove_project(&mut self, project_id: ProjectId) -> bool {
        match self.projects.iter().position(|id| *id == project_id) {
            Some(position) => {
                self.projects.remove(position);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_supervisor(&mut self, supervisor: Option<EmployeeId>) {
        self.supervisor = supervisor;
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.last_name == other.last_name
    }
}

impl Eq for Employee {}
