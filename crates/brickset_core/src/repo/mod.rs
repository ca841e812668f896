//! Repository layer: read-only access to loaded LEGO set records.
//!
//! # Responsibility
//! - Define the data-access contract consumed by query services.
//! - Load the Brickset JSON dataset once, at construction time.
//!
//! # Invariants
//! - `get_all()` returns the same records on every call.
//! - Loader failures are surfaced unchanged; callers never see partial data.

pub mod lego_set_repo;
