// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Generation driver
//!
//! Orchestrates one wipe-and-regenerate run: validate the source
//! directory, prepare (clear) the output directory, then walk every rerun
//! list, split it into scenarios, and render one runner class per
//! scenario. A failure reading one list or writing one runner is recorded
//! in the report and the run moves on to the next unit of work; only
//! source/output preparation failures abort the whole run.
//!
//! The run is synchronous and single-threaded. The scenario index is a
//! local counter owned by the driver for the duration of one run, so no
//! synchronization is needed and indices are contiguous per run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::descriptor::RunnerDescriptor;
use crate::error::CodegenError;
use crate::output::prepare_output_dir;
use crate::scanner::RerunListScanner;
use crate::splitter::split_scenarios;
use crate::template::{RenderContext, RunnerFlavor, RunnerTemplate};

/// Configuration for one generation run
///
/// Supplied once per run and read-only while the run executes.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Directory holding the rerun-list `.txt` files from the prior run
    pub source_dir: PathBuf,
    /// Root the generated sources go under (`src/test/java` by convention)
    pub test_source_root: PathBuf,
    /// Java package for the generated runner classes
    pub package: String,
    /// Glue (step definition) package referenced by each runner
    pub glue: String,
    /// Which runner convention to emit
    pub flavor: RunnerFlavor,
}

impl GenerationConfig {
    /// Directory the runner sources are written into
    ///
    /// The package segments become nested directories under the
    /// test-source root, e.g. `com.example.failed` maps to
    /// `src/test/java/com/example/failed`.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        let mut dir = self.test_source_root.clone();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        dir
    }
}

/// One recorded, non-fatal failure from a run
#[derive(Debug)]
pub struct GenerationFailure {
    /// The rerun list the failure is scoped to
    pub file: PathBuf,
    /// What went wrong
    pub error: CodegenError,
}

/// Outcome of a completed run
///
/// A run that hit per-file or per-scenario errors still completes; the
/// caller decides whether a non-empty error list fails the build.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of runner sources successfully written
    pub generated: usize,
    /// Per-file and per-scenario failures, in the order they occurred
    pub errors: Vec<GenerationFailure>,
}

impl GenerationReport {
    /// Whether the run finished without recording any failure
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Orchestrates one wipe-and-regenerate run
pub struct GenerationDriver {
    config: GenerationConfig,
}

impl GenerationDriver {
    /// Create a driver for the given configuration
    #[must_use]
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// The configuration this driver runs with
    #[must_use]
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Run generation to completion
    ///
    /// Returns after every discovered rerun list has been processed.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::DirectoryNotFound`] when the source
    /// directory is missing and [`CodegenError::OutputPrep`] when the
    /// output directory cannot be created or cleared. All other failures
    /// are recorded in the returned [`GenerationReport`].
    pub fn run(&self) -> Result<GenerationReport, CodegenError> {
        let scanner = RerunListScanner::new(&self.config.source_dir);
        // Validate the source directory before touching the output
        // directory: a bad source path must not wipe prior runners.
        let files = scanner.scan()?;

        let out_dir = self.config.output_dir();
        prepare_output_dir(&out_dir)?;

        info!(
            source = %self.config.source_dir.display(),
            output = %out_dir.display(),
            flavor = %self.config.flavor,
            "starting runner generation"
        );

        let template = self.config.flavor.template();
        let mut report = GenerationReport::default();
        let mut index: usize = 0;

        for file in files {
            debug!(file = %file.display(), "splitting rerun list");
            let text = match fs::read_to_string(&file) {
                Ok(text) => text,
                Err(source) => {
                    let error = CodegenError::SourceRead {
                        file: file.clone(),
                        source,
                    };
                    warn!(%error, "skipping unreadable rerun list");
                    report.errors.push(GenerationFailure { file, error });
                    continue;
                }
            };

            for scenario in split_scenarios(&text) {
                let descriptor = RunnerDescriptor::new(index, &scenario);
                // The index stays allocated even when rendering fails, so
                // artifact names never collide across retries.
                index += 1;

                let target = out_dir.join(descriptor.file_name());
                info!(
                    class = %descriptor.class_name,
                    scenario = %descriptor.scenario,
                    "generating runner"
                );

                match self.render_runner(template, &descriptor, &target) {
                    Ok(()) => report.generated += 1,
                    Err(source) => {
                        let error = CodegenError::Render {
                            file: target,
                            source,
                        };
                        warn!(%error, "skipping failed runner");
                        report.errors.push(GenerationFailure {
                            file: file.clone(),
                            error,
                        });
                    }
                }
            }
        }

        info!(
            generated = report.generated,
            errors = report.errors.len(),
            "runner generation finished"
        );
        Ok(report)
    }

    /// Render one descriptor into its target source file
    ///
    /// The source is rendered into memory first and written whole; a
    /// failure must not leave a truncated `.java` file behind for the
    /// downstream compile to trip over.
    fn render_runner(
        &self,
        template: &dyn RunnerTemplate,
        descriptor: &RunnerDescriptor,
        target: &Path,
    ) -> io::Result<()> {
        let ctx = RenderContext {
            descriptor,
            package: &self.config.package,
            glue: &self.config.glue,
        };
        let mut buf = Vec::with_capacity(1024);
        template.render(&ctx, &mut buf)?;
        fs::write(target, &buf).inspect_err(|_| {
            let _ = fs::remove_file(target);
        })
    }
}
