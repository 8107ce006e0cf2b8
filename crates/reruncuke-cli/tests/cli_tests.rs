// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for the reruncuke argument surface
//!
//! These tests verify flag parsing, the verbose/quiet level rules, and
//! the eager flavor check that fails a run before any I/O.

use clap::Parser;
use tracing::Level;

use reruncuke_cli::config::Config;
use reruncuke_codegen::{CodegenError, RunnerFlavor};

fn parse(args: &[&str]) -> Config {
    let mut full = vec!["reruncuke"];
    full.extend_from_slice(args);
    Config::try_parse_from(full).expect("parse should succeed")
}

const REQUIRED: &[&str] = &[
    "--rerun-dir",
    "target/cucumber-parallel",
    "--package",
    "com.example.failed",
    "--glue",
    "com.example.steps",
    "--flavor",
    "JUNIT",
];

// ============================================================================
// Required arguments
// ============================================================================

#[test]
fn test_all_required_args_parse() {
    let config = parse(REQUIRED);
    assert_eq!(config.rerun_dir.to_str(), Some("target/cucumber-parallel"));
    assert_eq!(config.package, "com.example.failed");
    assert_eq!(config.glue, "com.example.steps");
    assert_eq!(config.flavor, "JUNIT");
}

#[test]
fn test_missing_required_arg_is_rejected() {
    let result = Config::try_parse_from([
        "reruncuke",
        "--rerun-dir",
        "target/cucumber-parallel",
        "--package",
        "com.example.failed",
        "--glue",
        "com.example.steps",
    ]);
    assert!(result.is_err(), "flavor is required");
}

#[test]
fn test_short_flags_parse() {
    let config = parse(&[
        "-r",
        "lists",
        "-p",
        "com.x",
        "-g",
        "com.x.steps",
        "-f",
        "SERENITY",
    ]);
    assert_eq!(config.rerun_dir.to_str(), Some("lists"));
    assert_eq!(config.flavor, "SERENITY");
}

#[test]
fn test_test_root_defaults_to_maven_convention() {
    let config = parse(REQUIRED);
    assert_eq!(config.test_root.to_str(), Some("src/test/java"));
}

// ============================================================================
// Flavor handling
// ============================================================================

#[test]
fn test_junit_flavor_maps_to_generation_config() {
    let config = parse(REQUIRED);
    let generation = config.generation_config().expect("valid flavor");
    assert_eq!(generation.flavor, RunnerFlavor::Junit);
    assert_eq!(
        generation.output_dir().to_str(),
        Some("src/test/java/com/example/failed")
    );
}

#[test]
fn test_serenity_flavor_is_case_insensitive() {
    let mut args = REQUIRED.to_vec();
    let last = args.len() - 1;
    args[last] = "serenity";
    let config = parse(&args);
    let generation = config.generation_config().expect("valid flavor");
    assert_eq!(generation.flavor, RunnerFlavor::Serenity);
}

#[test]
fn test_unknown_flavor_fails_before_any_io() {
    let mut args = REQUIRED.to_vec();
    let last = args.len() - 1;
    args[last] = "TESTNG";
    let config = parse(&args);

    let err = config.generation_config().expect_err("flavor is invalid");
    assert!(matches!(err, CodegenError::UnknownFlavor { .. }));

    // The eager check also aborts a full run with zero filesystem effects.
    let err = reruncuke_cli::run(&config).expect_err("run should abort");
    assert!(matches!(err, CodegenError::UnknownFlavor { .. }));
}

// ============================================================================
// --verbose / --quiet flags
// ============================================================================

#[test]
fn test_default_log_level_is_info() {
    let config = parse(REQUIRED);
    assert!(!config.verbose);
    assert!(!config.quiet);
    assert_eq!(config.log_level(), Level::INFO);
}

#[test]
fn test_verbose_sets_debug_log_level() {
    let mut args = REQUIRED.to_vec();
    args.push("--verbose");
    let config = parse(&args);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_sets_warn_log_level() {
    let mut args = REQUIRED.to_vec();
    args.push("-q");
    let config = parse(&args);
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_verbose_wins_over_quiet() {
    let mut args = REQUIRED.to_vec();
    args.extend_from_slice(&["--verbose", "--quiet"]);
    let config = parse(&args);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_boolean_flag_value_syntax_not_supported() {
    // Boolean flags with default_value="false" are toggled by presence only
    let mut args: Vec<&str> = vec!["reruncuke"];
    args.extend_from_slice(REQUIRED);
    args.push("--verbose=true");
    let result = Config::try_parse_from(args);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}
