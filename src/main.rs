//! sodstat - Weather station CSV analysis & chart CLI
//!
//! Answers ad-hoc queries (list, min, max, avg, chart, repeats) over one
//! numeric column of a station export, considering only summary-of-day rows.

mod charts;
mod cli;
mod config;
mod data;
mod query;
mod stats;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sodstat=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();

    let Some(operation) = query::Operation::from_name(&args.operation) else {
        println!("Invalid operation: {}", args.operation);
        return ExitCode::from(2);
    };

    let config = config::QueryConfig::default();
    match query::run_query(&args.file, &args.column, operation, &config) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // one human-readable line, no backtrace
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
