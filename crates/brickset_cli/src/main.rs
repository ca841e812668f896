//! `brickset` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and load the dataset.
//! - Run one named query, or the default suite, and print the results.
//!
//! Exit codes: `0` success, `1` dataset load failure, `2` usage or
//! argument error (clap uses `2` for its own parse errors too).

mod config;

use brickset_core::{
    init_logging, init_stderr_logging, JsonLegoSetRepository, SetQuery, SetQueryService,
};
use clap::Parser;
use config::CliConfig;
use log::error;
use std::process::ExitCode;

const EXIT_LOAD_ERROR: u8 = 1;
const EXIT_USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    run(CliConfig::parse())
}

fn run(config: CliConfig) -> ExitCode {
    let logging = match config.log_dir.as_deref() {
        Some(dir) => init_logging(config.effective_log_level(), dir),
        None => init_stderr_logging(config.effective_log_level()),
    };
    if let Err(err) = logging {
        eprintln!("error: {err}");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let queries = match config.query.as_deref() {
        Some(name) => match SetQuery::parse(name, config.query_arg.as_deref()) {
            Ok(query) => vec![query],
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => SetQuery::default_suite(),
    };

    let repo = match JsonLegoSetRepository::load(&config.data_path) {
        Ok(repo) => repo,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_LOAD_ERROR);
        }
    };
    let service = SetQueryService::new(repo);

    let rendered = queries
        .iter()
        .map(|query| service.execute(query).to_string())
        .collect::<Vec<_>>();
    println!("{}", rendered.join("\n\n"));
    ExitCode::SUCCESS
}
