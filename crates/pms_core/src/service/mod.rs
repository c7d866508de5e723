//! Coordinating system over the three entity catalogs.
//!
//! # Responsibility
//! - Build the in-memory model from three record sources.
//! - Expose the only mutation entry points, keeping derived end dates and
//!   project capacity intact and purging relations on delete.

pub mod pms_service;
