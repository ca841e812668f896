//! Domain model for Brickset catalogue records.
//!
//! # Responsibility
//! - Define the record shape deserialized from the Brickset dataset.
//!
//! # Invariants
//! - Records are immutable once loaded; nothing in core mutates them.
//! - Absent `tags`/`theme` are represented as `None`, never as empty values.

pub mod lego_set;
