//! Project management system facade.
//!
//! # Invariants
//! - Every id stored in a relation refers to an entity in its catalog;
//!   deletes purge relations pointing at the removed entity.
//! - A project's end date is current whenever a call returns.
//! - No employee holds more than two projects.

use crate::config::PmsConfig;
use crate::import::{
    import_employees, import_projects, import_tasks, read_csv_file, ImportError, ImportReport,
    Imported, SourceRecord,
};
use crate::model::employee::Employee;
use crate::model::ids::{EmployeeId, ProjectId, TaskId};
use crate::model::project::Project;
use crate::model::task::Task;
use crate::repo::catalog::{Catalog, CatalogEntry};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type PmsResult<T> = Result<T, PmsError>;

/// Entity kind named in lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Employee,
    Project,
    Task,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Employee => write!(f, "employee"),
            Self::Project => write!(f, "project"),
            Self::Task => write!(f, "task"),
        }
    }
}

#[derive(Debug)]
pub enum PmsError {
    Import {
        entity: EntityKind,
        source: ImportError,
    },
    NotFound {
        entity: EntityKind,
        key: String,
    },
}

impl Display for PmsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Import { entity, source } => write!(f, "{entity} import failed: {source}"),
            Self::NotFound { entity, key } => write!(f, "{entity} not found: {key}"),
        }
    }
}

impl Error for PmsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Import { source, .. } => Some(source),
            Self::NotFound { .. } => None,
        }
    }
}

/// Import reports for the three sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub employees: ImportReport,
    pub projects: ImportReport,
    pub tasks: ImportReport,
}

/// In-memory employees, projects and tasks with consistent relations.
#[derive(Debug, Clone, Default)]
pub struct ProjectManagementSystem {
    employees: Catalog<Employee>,
    projects: Catalog<Project>,
    tasks: Catalog<Task>,
    load_report: LoadReport,
}

impl ProjectManagementSystem {
    /// Builds the model from three already-read record sequences.
    pub fn from_records<E, P, T>(employees: E, projects: P, tasks: T) -> Self
    where
        E: IntoIterator<Item = SourceRecord>,
        P: IntoIterator<Item = SourceRecord>,
        T: IntoIterator<Item = SourceRecord>,
    {
        let employees = logged_import(EntityKind::Employee, import_employees(employees));
        let projects = logged_import(EntityKind::Project, import_projects(projects));
        let tasks = logged_import(EntityKind::Task, import_tasks(tasks));

        Self {
            load_report: LoadReport {
                employees: employees.report,
                projects: projects.report,
                tasks: tasks.report,
            },
            employees: employees.catalog,
            projects: projects.catalog,
            tasks: tasks.catalog,
        }
    }

    /// Reads the three CSV files named by `config` and builds the model.
    ///
    /// # Errors
    /// - `Import` when any source cannot be opened or read.
    pub fn load(config: &PmsConfig) -> PmsResult<Self> {
        let employees = read_source(EntityKind::Employee, &config.employees_path)?;
        let projects = read_source(EntityKind::Project, &config.projects_path)?;
        let tasks = read_source(EntityKind::Task, &config.tasks_path)?;
        Ok(Self::from_records(employees, projects, tasks))
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn employees(&self) -> &[Employee] {
        self.employees.as_slice()
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.as_slice()
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn employee(&self, id: EmployeeId) -> PmsResult<&Employee> {
        self.employees
            .get(id)
            .ok_or_else(|| not_found(EntityKind::Employee, id))
    }

    pub fn project(&self, id: ProjectId) -> PmsResult<&Project> {
        self.projects
            .get(id)
            .ok_or_else(|| not_found(EntityKind::Project, id))
    }

    pub fn task(&self, id: TaskId) -> PmsResult<&Task> {
        self.tasks
            .get(id)
            .ok_or_else(|| not_found(EntityKind::Task, id))
    }

    pub fn employee_by_last_name(&self, last_name: &str) -> PmsResult<&Employee> {
        find_by_key(&self.employees, EntityKind::Employee, last_name)
    }

    pub fn project_by_name(&self, name: &str) -> PmsResult<&Project> {
        find_by_key(&self.projects, EntityKind::Project, name)
    }

    pub fn task_by_name(&self, name: &str) -> PmsResult<&Task> {
        find_by_key(&self.tasks, EntityKind::Task, name)
    }

    /// Supervisor of `employee`, if one was linked and still exists.
    pub fn supervisor_of(&self, employee: &Employee) -> Option<&Employee> {
        employee.supervisor().and_then(|id| self.employees.get(id))
    }

    /// Projects assigned to `employee`, in assignment order.
    pub fn projects_of(&self, employee: &Employee) -> Vec<&Project> {
        employee
            .projects()
            .iter()
            .filter_map(|id| self.projects.get(*id))
            .collect()
    }

    /// Tasks assigned to `project`, in assignment order, duplicates included.
    pub fn tasks_of(&self, project: &Project) -> Vec<&Task> {
        project
            .task_ids()
            .filter_map(|id| self.tasks.get(id))
            .collect()
    }

    /// `"<first> <last>, supervisor: <supervisor last name or empty>"`.
    pub fn employee_summary(&self, employee: &Employee) -> String {
        let supervisor = self
            .supervisor_of(employee)
            .map(Employee::last_name)
            .unwrap_or("");
        format!(
            "{} {}, supervisor: {}",
            employee.first_name(),
            employee.last_name(),
            supervisor
        )
    }

    /// Assigns a task to a project and returns the updated project.
    pub fn assign_task_to_project(
        &mut self,
        task_id: TaskId,
        project_id: ProjectId,
    ) -> PmsResult<&Project> {
        let task = self
            .tasks
            .get(task_id)
            .ok_or_else(|| not_found(EntityKind::Task, task_id))?;
        let project = self
            .projects
            .get_mut(project_id)
            .ok_or_else(|| not_found(EntityKind::Project, project_id))?;
        project.assign_task(task);
        Ok(&*project)
    }

    /// Removes one slot of a task from a project; `Ok(false)` when not assigned.
    pub fn remove_task_from_project(
        &mut self,
        task_id: TaskId,
        project_id: ProjectId,
    ) -> PmsResult<bool> {
        let project = self
            .projects
            .get_mut(project_id)
            .ok_or_else(|| not_found(EntityKind::Project, project_id))?;
        Ok(project.remove_task(task_id))
    }

    /// Assigns a project to an employee.
    ///
    /// Returns `Ok(false)` without changing anything when the employee
    /// already holds two projects.
    pub fn assign_project_to_employee(
        &mut self,
        project_id: ProjectId,
        employee_id: EmployeeId,
    ) -> PmsResult<bool> {
        if !self.projects.contains(project_id) {
            return Err(not_found(EntityKind::Project, project_id));
        }
        let employee = self
            .employees
            .get_mut(employee_id)
            .ok_or_else(|| not_found(EntityKind::Employee, employee_id))?;

        let assigned = employee.assign_project(project_id);
        if !assigned {
            warn!(
                "event=project_capacity module=service status=rejected employee={} project={}",
                employee.last_name(),
                project_id
            );
        }
        Ok(assigned)
    }

    /// Removes a project from an employee; `Ok(false)` when not assigned.
    pub fn remove_project_from_employee(
        &mut self,
        project_id: ProjectId,
        employee_id: EmployeeId,
    ) -> PmsResult<bool> {
        let employee = self
            .employees
            .get_mut(employee_id)
            .ok_or_else(|| not_found(EntityKind::Employee, employee_id))?;
        Ok(employee.remove_project(project_id))
    }

    /// Deletes a task and drops it from every project that lists it.
    pub fn delete_task(&mut self, task_id: TaskId) -> PmsResult<Task> {
        let task = self
            .tasks
            .remove(task_id)
            .ok_or_else(|| not_found(EntityKind::Task, task_id))?;

        let affected = self
            .projects
            .iter_mut()
            .map(|project| project.purge_task(task_id))
            .filter(|removed| *removed > 0)
            .count();
        info!(
            "event=task_deleted module=service status=ok task={} projects_updated={}",
            task.name(),
            affected
        );
        Ok(task)
    }

    /// Deletes a project and drops it from every employee's project list.
    pub fn delete_project(&mut self, project_id: ProjectId) -> PmsResult<Project> {
        let project = self
            .projects
            .remove(project_id)
            .ok_or_else(|| not_found(EntityKind::Project, project_id))?;

        let mut affected = 0;
        for employee in self.employees.iter_mut() {
            while employee.remove_project(project_id) {
                affected += 1;
            }
        }
        info!(
            "event=project_deleted module=service status=ok project={} employees_updated={}",
            project.name(),
            affected
        );
        Ok(project)
    }

    /// Deletes an employee and clears every supervisor link pointing at them.
    pub fn delete_employee(&mut self, employee_id: EmployeeId) -> PmsResult<Employee> {
        let employee = self
            .employees
            .remove(employee_id)
            .ok_or_else(|| not_found(EntityKind::Employee, employee_id))?;

        let mut affected = 0;
        for subordinate in self.employees.iter_mut() {
            if subordinate.supervisor() == Some(employee_id) {
                subordinate.set_supervisor(None);
                affected += 1;
            }
        }
        info!(
            "event=employee_deleted module=service status=ok employee={} subordinates_updated={}",
            employee.last_name(),
            affected
        );
        Ok(employee)
    }

    /// Sum of `days_needed` over the given projects.
    pub fn maximum_days_to_work_for(&self, project_ids: &[ProjectId]) -> PmsResult<i64> {
        project_ids
            .iter()
            .try_fold(0, |total: i64, id| -> PmsResult<i64> {
                Ok(total + self.project(*id)?.days_needed())
            })
    }
}

fn read_source(entity: EntityKind, path: &Path) -> PmsResult<Vec<SourceRecord>> {
    info!(
        "event=import module=import status=start entity={} path={}",
        entity,
        path.display()
    );
    read_csv_file(path).map_err(|source| {
        error!(
            "event=import module=import status=error entity={} path={} error={}",
            entity,
            path.display(),
            source
        );
        PmsError::Import { entity, source }
    })
}

fn logged_import<T: CatalogEntry>(entity: EntityKind, imported: Imported<T>) -> Imported<T> {
    let report = &imported.report;
    info!(
        "event=import module=import status=ok entity={} rows={} accepted={} skipped_invalid={} skipped_duplicate={} unresolved={}",
        entity,
        report.rows_read,
        report.accepted,
        report.skipped_invalid,
        report.skipped_duplicate,
        report.unresolved_references
    );
    imported
}

fn find_by_key<'a, T: CatalogEntry>(
    catalog: &'a Catalog<T>,
    entity: EntityKind,
    key: &str,
) -> PmsResult<&'a T> {
    catalog.find_by_key(key).ok_or_else(|| PmsError::NotFound {
        entity,
        key: key.to_string(),
    })
}

fn not_found(entity: EntityKind, id: impl Display) -> PmsError {
    PmsError::NotFound {
        entity,
        key: id.to_string(),
    }
}
