//! Task domain model.
//!
//! # Invariants
//! - `name` is non-empty and is the natural key.
//! - `estimated_days` is `estimated_hours / 24`; negative estimates are kept
//!   as signed corrections.
//! - Tasks are immutable after construction and carry no project back-reference.

use super::ids::TaskId;
use super::EntityValidationError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Hours in one estimated work day.
pub const HOURS_PER_DAY: i32 = 24;

/// Unit of work that can be assigned to projects.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    id: TaskId,
    name: String,
    description: String,
    estimated_hours: i32,
    estimated_days: f64,
}

impl Task {
    /// Creates a task from trimmed import values.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        estimated_hours: i32,
    ) -> Result<Self, EntityValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(EntityValidationError::EmptyName);
        }

        Ok(Self {
            id: TaskId::from_key(&name),
            name,
            description: description.into().trim().to_string(),
            estimated_hours,
            estimated_days: f64::from(estimated_hours) / f64::from(HOURS_PER_DAY),
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Effort estimate as imported, in whole hours.
    pub fn estimated_hours(&self) -> i32 {
        self.estimated_hours
    }

    /// Effort estimate in (fractional) days.
    pub fn estimated_days(&self) -> f64 {
        self.estimated_days
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Task {}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.6} days): {}",
            self.name, self.estimated_days, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, HOURS_PER_DAY};
    use crate::model::EntityValidationError;

    #[test]
    fn hours_are_converted_to_days() {
        let task = Task::new("Data Transformation", "reshape", 12).unwrap();
        assert!((task.estimated_days() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn one_work_day_of_hours_is_one_day() {
        let task = Task::new("Backup", "", HOURS_PER_DAY).unwrap();
        assert!((task.estimated_days() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn negative_estimates_are_kept() {
        let task = Task::new("Correction", "", -12).unwrap();
        assert!((task.estimated_days() + 0.5).abs() < 1e-9);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Task::new("   ", "nothing", 4).unwrap_err();
        assert_eq!(err, EntityValidationError::EmptyName);
    }

    #[test]
    fn equality_ignores_everything_but_name() {
        let a = Task::new("Deploy", "first", 8).unwrap();
        let b = Task::new("Deploy", "second", 80).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn display_matches_listing_format() {
        let task = Task::new("Review", " check PRs ", 6).unwrap();
        assert_eq!(task.to_string(), "Review (0.250000 days): check PRs");
    }
}
