//! Domain model for employees, projects and tasks.
//!
//! # Responsibility
//! - Define the three entity shapes and the identifiers that link them.
//! - Keep derived and cardinality invariants inside entity methods.
//!
//! # Invariants
//! - Every entity is identified by an id derived from its natural key.
//! - Relations between entities are stored as ids, never as embedded copies.
//! - Fields are private; all mutation goes through invariant-keeping methods.

pub mod employee;
pub mod ids;
pub mod project;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Required-field violations raised by entity constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    /// Employee first name is empty after trimming.
    EmptyFirstName,
    /// Project or task name is empty after trimming.
    EmptyName,
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "first name must not be empty"),
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl Error for EntityValidationError {}
