//! CLI configuration.
//!
//! # Invariants
//! - Precedence is flags > environment > defaults (clap `env` fallback).
//! - Without a query name the default suite runs.

use clap::Parser;
use std::path::PathBuf;

pub const ENV_DATA: &str = "BRICKSET_DATA";
pub const ENV_LOG_LEVEL: &str = "BRICKSET_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "BRICKSET_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "brickset", version)]
#[command(about = "Aggregate queries over the Brickset LEGO set catalogue")]
pub struct CliConfig {
    /// Path to the Brickset JSON dataset
    #[arg(long = "data", env = ENV_DATA, default_value = brickset_core::DEFAULT_DATASET_FILE)]
    pub data_path: PathBuf,

    /// Log level: trace|debug|info|warn|error (build default when unset)
    #[arg(long, env = ENV_LOG_LEVEL)]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr when unset
    #[arg(long, env = ENV_LOG_DIR)]
    pub log_dir: Option<String>,

    /// Query: has-tag | tag-prefix | max-pieces | partition | themes
    pub query: Option<String>,

    /// Query argument: tag, prefix or piece threshold
    #[arg(allow_hyphen_values = true)]
    pub query_arg: Option<String>,
}

impl CliConfig {
    /// Level to start logging with.
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(brickset_core::default_log_level())
    }
}
