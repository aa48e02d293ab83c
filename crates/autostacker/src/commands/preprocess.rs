//! Preprocess command - interpolate every string of a template document

use crate::context::Context;
use crate::output::{print_json, render_json};
use anyhow::{Context as _, Result};
use autostacker_core::preprocess_file;
use colored::Colorize;
use log::info;
use std::path::PathBuf;

/// Preprocess `file` and print or write the resulting document
///
/// # Arguments
///
/// * `file` - Template document (JSON, optionally with leading `//` comments)
/// * `output` - Write here instead of stdout
/// * `compact` - Emit compact JSON
pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    compact: bool,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;

    if ctx.verbose {
        eprintln!("{} Preprocessing {}", "→".cyan(), file.display());
    }

    let document = preprocess_file(&file, ctx.config.preprocess_options())
        .with_context(|| format!("Failed to preprocess {}", file.display()))?;
    let rendered = render_json(&document, compact)?;

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("wrote {} bytes to {}", rendered.len() + 1, path.display());
            println!(
                "{} Preprocessed {} → {}",
                "✓".green().bold(),
                file.display(),
                path.display()
            );
        }
        None => print_json(&rendered)?,
    }

    Ok(())
}
