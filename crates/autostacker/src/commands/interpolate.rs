//! Interpolate command - show what one string compiles to

use crate::context::Context;
use crate::output::{print_json, render_json};
use anyhow::{Context as _, Result};
use autostacker_core::{cfn, Interpolator};
use colored::Colorize;
use std::path::PathBuf;

/// Interpolate `text` and print the template functions (or the tree with `ast`)
///
/// # Arguments
///
/// * `text` - Source text with @ expressions
/// * `ast` - Print the expression tree instead of template functions
/// * `base_dir` - Overrides the configured inclusion base directory
pub fn run(
    text: String,
    ast: bool,
    base_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;

    let mut options = ctx.config.interpolation_options();
    if base_dir.is_some() {
        options.base_dir = base_dir;
    }

    let result = Interpolator::new(options)
        .interpolate(&text)
        .context("Failed to interpolate text")?;

    if ctx.verbose {
        eprintln!("{} {}", "→".cyan(), result);
    }

    let value = if ast {
        serde_json::to_value(&result)?
    } else {
        cfn::to_value(&result)
    };
    print_json(&render_json(&value, false)?)?;
    Ok(())
}
