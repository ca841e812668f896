//! Core use-case services.
//!
//! # Responsibility
//! - Answer aggregate questions over repository-provided records.
//! - Keep CLI callers decoupled from dataset loading details.

pub mod set_query_service;
