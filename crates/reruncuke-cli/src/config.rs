// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the reruncuke CLI
//!
//! This module maps the command line onto a
//! [`GenerationConfig`](reruncuke_codegen::GenerationConfig). The flags
//! mirror the knobs of the original build-plugin wiring: where the rerun
//! lists live, the package and glue for the generated classes, and the
//! runner flavor.

use std::path::PathBuf;

use clap::Parser;

use reruncuke_codegen::{CodegenError, GenerationConfig, RunnerFlavor};

/// reruncuke - generate runner classes for failed Cucumber scenarios
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "reruncuke")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory containing the rerun-list `.txt` files from the prior run
    ///
    /// e.g. target/cucumber-parallel, when the previous run used the
    /// `rerun:` output plugin with per-thread lists.
    #[arg(short = 'r', long, env = "RERUNCUKE_RERUN_DIR")]
    pub rerun_dir: PathBuf,

    /// Java package for the generated runner classes
    ///
    /// Package segments become nested directories under the test-source
    /// root, e.g. com.example.failed -> src/test/java/com/example/failed.
    #[arg(short, long, env = "RERUNCUKE_PACKAGE")]
    pub package: String,

    /// Glue (step definition) package the generated runners point at
    #[arg(short, long, env = "RERUNCUKE_GLUE")]
    pub glue: String,

    /// Runner flavor: JUNIT or SERENITY
    ///
    /// Parsed eagerly; an unrecognized value fails the run before any
    /// directory is scanned or cleared.
    #[arg(short, long, env = "RERUNCUKE_FLAVOR")]
    pub flavor: String,

    /// Test-source root the package directories are created under
    #[arg(long, default_value = "src/test/java")]
    pub test_root: PathBuf,

    /// Print the run summary as JSON on stdout
    ///
    /// Logs still go to stderr, so the JSON stays machine-readable.
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Determine the log level based on verbose/quiet flags
    ///
    /// Verbose takes precedence over quiet if both are specified.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Translate the CLI flags into a generation configuration
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::UnknownFlavor`] when the `--flavor` value
    /// is not `JUNIT` or `SERENITY`.
    pub fn generation_config(&self) -> Result<GenerationConfig, CodegenError> {
        let flavor: RunnerFlavor = self.flavor.parse()?;
        Ok(GenerationConfig {
            source_dir: self.rerun_dir.clone(),
            test_source_root: self.test_root.clone(),
            package: self.package.clone(),
            glue: self.glue.clone(),
            flavor,
        })
    }
}
