// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Runner templates
//!
//! Rendering is the boundary between the generation core and the produced
//! Java source: the core never inspects template internals, it selects a
//! flavor and hands over a [`RenderContext`]. Two flavors exist, one per
//! generated-runner convention:
//!
//! - [`RunnerFlavor::Junit`] - plain Cucumber on JUnit 4
//!   (`@RunWith(Cucumber.class)`)
//! - [`RunnerFlavor::Serenity`] - Serenity BDD's Cucumber runner
//!   (`@RunWith(CucumberWithSerenity.class)`)
//!
//! Both emit a class with a `@CucumberOptions` block referencing exactly
//! one scenario, the configured glue package, the descriptor's
//! output-plugin directives, and `strict`/`monochrome` fixed to `true`.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::descriptor::RunnerDescriptor;
use crate::error::CodegenError;

/// Which generated-runner convention to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerFlavor {
    /// Cucumber on JUnit 4
    Junit,
    /// Serenity BDD's Cucumber runner
    Serenity,
}

impl RunnerFlavor {
    /// The template implementing this flavor
    #[must_use]
    pub fn template(self) -> &'static dyn RunnerTemplate {
        match self {
            Self::Junit => &JunitTemplate,
            Self::Serenity => &SerenityTemplate,
        }
    }
}

impl FromStr for RunnerFlavor {
    type Err = CodegenError;

    /// Parse a configured flavor value, case-insensitively
    ///
    /// Anything other than `JUNIT` or `SERENITY` is
    /// [`CodegenError::UnknownFlavor`]; callers check this before any I/O.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JUNIT" => Ok(Self::Junit),
            "SERENITY" => Ok(Self::Serenity),
            _ => Err(CodegenError::UnknownFlavor {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RunnerFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Junit => write!(f, "JUNIT"),
            Self::Serenity => write!(f, "SERENITY"),
        }
    }
}

/// Everything a template needs to render one runner class
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// The runner being generated
    pub descriptor: &'a RunnerDescriptor,
    /// Java package the generated class is declared in
    pub package: &'a str,
    /// Glue (step definition) package the runner points at
    pub glue: &'a str,
}

/// Renders one runner descriptor as compilable source
pub trait RunnerTemplate {
    /// Write the full source text for one runner class into `out`
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the sink; the caller records it as
    /// a per-runner [`CodegenError::Render`].
    fn render(&self, ctx: &RenderContext<'_>, out: &mut dyn Write) -> io::Result<()>;
}

/// Template for Cucumber-on-JUnit runner classes
#[derive(Debug, Clone, Copy)]
pub struct JunitTemplate;

impl RunnerTemplate for JunitTemplate {
    fn render(&self, ctx: &RenderContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "package {};", ctx.package)?;
        writeln!(out)?;
        writeln!(out, "import io.cucumber.junit.Cucumber;")?;
        writeln!(out, "import io.cucumber.junit.CucumberOptions;")?;
        writeln!(out, "import org.junit.runner.RunWith;")?;
        writeln!(out)?;
        writeln!(out, "@RunWith(Cucumber.class)")?;
        write_cucumber_options(ctx, out)?;
        write_class_body(ctx, out)
    }
}

/// Template for Serenity BDD runner classes
#[derive(Debug, Clone, Copy)]
pub struct SerenityTemplate;

impl RunnerTemplate for SerenityTemplate {
    fn render(&self, ctx: &RenderContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "package {};", ctx.package)?;
        writeln!(out)?;
        writeln!(out, "import io.cucumber.junit.CucumberOptions;")?;
        writeln!(out, "import net.serenitybdd.cucumber.CucumberWithSerenity;")?;
        writeln!(out, "import org.junit.runner.RunWith;")?;
        writeln!(out)?;
        writeln!(out, "@RunWith(CucumberWithSerenity.class)")?;
        write_cucumber_options(ctx, out)?;
        write_class_body(ctx, out)
    }
}

/// The `@CucumberOptions` block shared by both flavors
fn write_cucumber_options(ctx: &RenderContext<'_>, out: &mut dyn Write) -> io::Result<()> {
    let plugins = ctx
        .descriptor
        .output_plugins
        .iter()
        .map(|plugin| format!("\"{plugin}\""))
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out, "@CucumberOptions(")?;
    writeln!(out, "        features = {{\"{}\"}},", ctx.descriptor.scenario)?;
    writeln!(out, "        glue = {{\"{}\"}},", ctx.glue)?;
    writeln!(out, "        plugin = {{{plugins}}},")?;
    writeln!(out, "        strict = true,")?;
    writeln!(out, "        monochrome = true")?;
    writeln!(out, ")")
}

fn write_class_body(ctx: &RenderContext<'_>, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "public class {} {{", ctx.descriptor.class_name)?;
    writeln!(out, "}}")
}
