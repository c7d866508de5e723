//! Core domain logic for the project management system.
//! Owns employees, projects and tasks, and every invariant linking them.

pub mod config;
pub mod import;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, PmsConfig};
pub use import::{
    read_csv, read_csv_file, ImportError, ImportReport, Imported, RowError, SourceRecord,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, MAX_PROJECTS_PER_EMPLOYEE};
pub use model::ids::{EmployeeId, ProjectId, TaskId};
pub use model::project::{AssignedTask, Project};
pub use model::task::Task;
pub use model::EntityValidationError;
pub use repo::catalog::{Catalog, CatalogEntry};
pub use service::pms_service::{
    EntityKind, LoadReport, PmsError, PmsResult, ProjectManagementSystem,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
