// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Runner descriptors
//!
//! A descriptor is the generation-time record for one runner class:
//! its class name, the scenario it re-executes, and the output-plugin
//! directives the generated class will carry. All three are derived from
//! a run-scoped index, so every generated runner writes its own result
//! and rerun artifacts without clobbering its siblings.

use serde::Serialize;

/// Base name shared by all generated runner classes
pub const CLASS_NAME_PREFIX: &str = "FailedRunner";

/// Extension appended when a class name is used as a file name
pub const SOURCE_FILE_EXT: &str = "java";

/// Directory the generated runners write their own artifacts into
const ARTIFACT_DIR: &str = "target/cucumber-parallel";

/// Describes one runner class to be generated
///
/// Created once per scenario, consumed immediately by rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerDescriptor {
    /// Run-scoped index, unique and contiguous across one generation run
    pub index: usize,
    /// Class name, `FailedRunner<index>` (no file extension)
    pub class_name: String,
    /// The scenario identifier this runner re-executes, trimmed
    pub scenario: String,
    /// Output-plugin directives, parameterized with the same index
    pub output_plugins: Vec<String>,
}

impl RunnerDescriptor {
    /// Build the descriptor for one scenario
    ///
    /// Pure data construction; the caller owns the index counter and must
    /// only advance it for scenarios that will actually be rendered.
    #[must_use]
    pub fn new(index: usize, scenario: &str) -> Self {
        Self {
            index,
            class_name: format!("{CLASS_NAME_PREFIX}{index}"),
            scenario: scenario.trim().to_string(),
            output_plugins: vec![
                format!("json:{ARTIFACT_DIR}/Failed{index}.json"),
                format!("rerun:{ARTIFACT_DIR}/Failed{index}.txt"),
            ],
        }
    }

    /// File name for the generated source, e.g. `FailedRunner3.java`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.class_name, SOURCE_FILE_EXT)
    }
}
