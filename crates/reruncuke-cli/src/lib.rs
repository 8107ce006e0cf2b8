// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! reruncuke-cli library
//!
//! This module exports the CLI configuration and run entry point for use
//! in integration tests and as a library.

pub mod config;
pub mod summary;

use reruncuke_codegen::{CodegenError, GenerationDriver, GenerationReport};

use crate::config::Config;

/// Run one generation pass with the parsed CLI configuration
///
/// The flavor value is parsed before any directory is touched, so an
/// unrecognized flavor fails the run with zero filesystem effects.
///
/// # Errors
///
/// Returns [`CodegenError::UnknownFlavor`] for a bad `--flavor` value and
/// propagates the fatal generation errors
/// ([`CodegenError::DirectoryNotFound`], [`CodegenError::OutputPrep`]).
pub fn run(config: &Config) -> Result<GenerationReport, CodegenError> {
    let generation = config.generation_config()?;
    GenerationDriver::new(generation).run()
}
