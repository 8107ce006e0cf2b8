// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! reruncuke: generate runner classes for failed Cucumber scenarios
//!
//! This binary reads the rerun lists a prior Cucumber run left behind and
//! regenerates one runner class per failed scenario, so the next build
//! step re-executes exactly what failed. Logs go to stderr; the optional
//! JSON summary goes to stdout.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};

use reruncuke_cli::config::Config;
use reruncuke_cli::summary::RunSummary;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr so --json output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    let report = match reruncuke_cli::run(&config) {
        Ok(report) => report,
        Err(err) => {
            error!(%err, "runner generation aborted");
            return ExitCode::FAILURE;
        }
    };

    for failure in &report.errors {
        warn!(file = %failure.file.display(), error = %failure.error, "recorded generation failure");
    }

    let summary = RunSummary::from_report(&report);
    if config.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(%err, "failed to serialize run summary");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "generated {} runner(s), {} error(s)",
            summary.generated,
            summary.errors.len()
        );
    }

    // Partial failure is not a build failure: callers inspect the summary.
    ExitCode::SUCCESS
}
