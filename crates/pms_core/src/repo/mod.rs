//! In-memory entity storage.
//!
//! # Responsibility
//! - Own entity instances and address them by stable id.
//! - Keep first-seen order and O(1) natural-key lookup.
//!
//! # Invariants
//! - A catalog never holds two entities with the same natural key.
//! - Removal preserves the relative order of the remaining entities.

pub mod catalog;
