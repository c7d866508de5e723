//! Project domain model and end-date maintenance.
//!
//! # Invariants
//! - `name` is non-empty and is the natural key.
//! - `end_date == start_date + ceil(buffer + sum(task estimated days))`
//!   after construction and after every task mutation.
//! - The task list may hold the same task more than once; each entry
//!   contributes its estimate.

use super::ids::{ProjectId, TaskId};
use super::task::{Task, HOURS_PER_DAY};
use super::EntityValidationError;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// One task slot on a project.
///
/// Only the estimate needed for end-date derivation is kept alongside the id;
/// task details are resolved through the task catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignedTask {
    pub task_id: TaskId,
    pub estimated_hours: i32,
}

/// Scheduled project with a derived end date.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    start_date: NaiveDate,
    buffer: u32,
    end_date: NaiveDate,
    tasks: Vec<AssignedTask>,
}

impl Project {
    /// Creates a project with no tasks; the end date is derived immediately.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        buffer: u32,
    ) -> Result<Self, EntityValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(EntityValidationError::EmptyName);
        }

        let mut project = Self {
            id: ProjectId::from_key(&name),
            name,
            start_date,
            buffer,
            end_date: start_date,
            tasks: Vec::new(),
        };
        project.refresh_end_date();
        Ok(project)
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Slack days added on top of task estimates.
    pub fn buffer(&self) -> u32 {
        self.buffer
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Assigned task slots in assignment order.
    pub fn tasks(&self) -> &[AssignedTask] {
        &self.tasks
    }

    /// Assigned task ids in assignment order, duplicates included.
    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks.iter().map(|slot| slot.task_id)
    }

    /// Calendar days between start and end date.
    pub fn days_needed(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Appends `task` and re-derives the end date.
    ///
    /// Assigning a task that is already present adds a second slot.
    pub fn assign_task(&mut self, task: &Task) {
        self.tasks.push(AssignedTask {
            task_id: task.id(),
            estimated_hours: task.estimated_hours(),
        });
        self.refresh_end_date();
    }

    /// Removes the first slot holding `task_id` and re-derives the end date.
    ///
    /// Returns `false` (and changes nothing) when the task is not assigned.
    pub fn remove_task(&mut self, task_id: TaskId) -> bool {
        let Some(position) = self.tasks.iter().position(|slot| slot.task_id == task_id) else {
            return false;
        };
        self.tasks.remove(position);
        self.refresh_end_date();
        true
    }

    /// Removes every slot holding `task_id`, returning how many were dropped.
    pub fn purge_task(&mut self, task_id: TaskId) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|slot| slot.task_id != task_id);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.refresh_end_date();
        }
        removed
    }

    fn refresh_end_date(&mut self) {
        // Whole hours keep ceil() exact; fractional day sums drift in f64.
        let task_hours: i64 = self
            .tasks
            .iter()
            .map(|slot| i64::from(slot.estimated_hours))
            .sum();
        let hours_per_day = i64::from(HOURS_PER_DAY);
        let total_hours = i64::from(self.buffer) * hours_per_day + task_hours;
        let days = -(-total_hours).div_euclid(hours_per_day);
        let shifted = if days >= 0 {
            self.start_date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.start_date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        self.end_date = shifted.unwrap_or(if days >= 0 {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        });
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Project {}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} to {}, buffer: {}",
            self.name, self.start_date, self.end_date, self.buffer
        )
    }
}
