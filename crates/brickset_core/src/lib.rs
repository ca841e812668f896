//! Read-only query layer over the Brickset LEGO set catalogue.
//!
//! Records are loaded once by a repository and never mutated; every query is
//! a pure aggregation over that fixed collection.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogSink};
pub use model::lego_set::LegoSet;
pub use query::{supported_queries, QueryError, QueryOutcome, QueryResult, SetQuery};
pub use repo::lego_set_repo::{
    InMemoryLegoSetRepository, JsonLegoSetRepository, LegoSetRepository, RepoError, RepoResult,
    DEFAULT_DATASET_FILE,
};
pub use service::set_query_service::{SetQueryService, DEFAULT_PIECE_THRESHOLD};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
