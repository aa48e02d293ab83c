//! Interpolation module - `@` expression compiler for template strings
//!
//! Turns a template string into either the unchanged text or a tree of
//! references, attribute lookups and map lookups joined with literal text.
//! Names are not validated and nothing is resolved; the tree is handed to a
//! serializer such as [`crate::cfn`].
//!
//! ## Syntax
//!
//! - Escape: `@@` is a literal `@`; an `@` that starts nothing stays literal
//! - Reference: `@Name`, `@AWS::Region`
//! - Attribute: `@Name.attr.path` (greedy) or `@{Name.attr}` (delimited)
//! - Map lookup: `@Map[Top, Second]`, or `@Env[key]` for `EnvMap[@Env, key]`
//! - Delimiting: `@{Name}.example.com` stops the expression at the brace
//! - Inclusion: `@file://path` or `@{file://path}` splices the file content
//!   into the text and scanning continues over it
//!
//! ## Example
//!
//! ```rust
//! use autostacker_core::interpolation::{interpolate, Expr, Interpolated};
//!
//! let result = interpolate("@Param").unwrap();
//! assert_eq!(result, Interpolated::Expr(Expr::Reference("Param".to_string())));
//! ```

mod builder;
mod expr;
mod scanner;
mod tree;

use std::path::PathBuf;

use crate::config::consts::DEFAULT_INCLUDE_LIMIT;
use crate::error::Result;
use scanner::ScanContext;

pub use tree::{Expr, Interpolated, Join, MapLookup, Part};

/// Options for one interpolator
#[derive(Debug, Clone)]
pub struct InterpolationOptions {
    /// Directory relative `file://` paths resolve against (process cwd if `None`)
    pub base_dir: Option<PathBuf>,
    /// Maximum number of file inclusions in one call
    pub include_limit: usize,
}

impl Default for InterpolationOptions {
    fn default() -> Self {
        Self {
            base_dir: None,
            include_limit: DEFAULT_INCLUDE_LIMIT,
        }
    }
}

/// Interpolator for template strings
#[derive(Debug, Clone, Default)]
pub struct Interpolator {
    options: InterpolationOptions,
}

impl Interpolator {
    /// Create a new interpolator
    pub fn new(options: InterpolationOptions) -> Self {
        Self { options }
    }

    /// Interpolate one string
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A `@{` or `@Name[` is never closed
    /// - An included file cannot be read
    /// - More than `include_limit` files are included
    pub fn interpolate(&self, input: &str) -> Result<Interpolated> {
        let ctx = ScanContext::new(&self.options);
        scanner::scan(&ctx, input, 0)
    }
}

/// Convenience function to interpolate with default options
pub fn interpolate(input: &str) -> Result<Interpolated> {
    Interpolator::default().interpolate(input)
}

#[cfg(test)]
mod tests;
