// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! reruncuke-codegen: failed-scenario runner generation
//!
//! This library crate turns the rerun lists left behind by a Cucumber run
//! (one `.txt` file per execution thread, one failed scenario per line) into
//! compilable runner classes, so a follow-up build step can re-execute
//! exactly the scenarios that failed.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use reruncuke_codegen::{GenerationConfig, GenerationDriver, RunnerFlavor};
//!
//! let config = GenerationConfig {
//!     source_dir: "target/cucumber-parallel".into(),
//!     test_source_root: "src/test/java".into(),
//!     package: "com.example.failed".to_string(),
//!     glue: "com.example.steps".to_string(),
//!     flavor: RunnerFlavor::Junit,
//! };
//!
//! let report = GenerationDriver::new(config).run().expect("generation run");
//! println!("generated {} runners", report.generated);
//! ```

pub mod descriptor;
pub mod driver;
pub mod error;
pub mod output;
pub mod scanner;
pub mod splitter;
pub mod template;

pub use descriptor::RunnerDescriptor;
pub use driver::{GenerationConfig, GenerationDriver, GenerationFailure, GenerationReport};
pub use error::CodegenError;
pub use scanner::RerunListScanner;
pub use splitter::split_scenarios;
pub use template::{RenderContext, RunnerFlavor, RunnerTemplate};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::descriptor::RunnerDescriptor;
    pub use crate::driver::{GenerationConfig, GenerationDriver, GenerationReport};
    pub use crate::error::CodegenError;
    pub use crate::template::RunnerFlavor;
}
