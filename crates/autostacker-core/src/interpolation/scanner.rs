//! Literal scanning and the driver loop
//!
//! The scanner copies text verbatim until it meets an `@`, then decides what
//! the `@` starts:
//!
//! ```text
//! @@            -> literal '@'
//! @{ ... }      -> delimited expression (body ends at the matching '}')
//! @name...      -> greedy expression
//! @file://path  -> inclusion: buffer becomes file content + remainder
//! @<other>      -> literal '@', scanning resumes at <other>
//! ```

use std::borrow::Cow;
use std::cell::Cell;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use super::builder::TreeBuilder;
use super::expr::{self, Mode};
use super::tree::{Expr, Interpolated};
use super::InterpolationOptions;
use crate::error::{Error, Result};

pub(crate) const INTRODUCER: char = '@';
const FILE_SCHEME: &str = "file://";

/// State shared by one top-level interpolation and all nested scans
pub(crate) struct ScanContext<'a> {
    options: &'a InterpolationOptions,
    includes: Cell<usize>,
}

impl<'a> ScanContext<'a> {
    pub fn new(options: &'a InterpolationOptions) -> Self {
        Self {
            options,
            includes: Cell::new(0),
        }
    }

    /// Read an included file in full
    fn read_include(&self, path: &str) -> Result<String> {
        let count = self.includes.get() + 1;
        if count > self.options.include_limit {
            return Err(Error::IncludeLimitExceeded {
                limit: self.options.include_limit,
            });
        }
        self.includes.set(count);

        let resolved = resolve_include_path(self.options.base_dir.as_deref(), path);
        let content =
            std::fs::read_to_string(&resolved).map_err(|source| Error::IncludeReadFailed {
                path: resolved.clone(),
                source,
            })?;
        debug!(
            "including {} ({} bytes, include #{})",
            resolved.display(),
            content.len(),
            count
        );
        Ok(content)
    }
}

fn resolve_include_path(base_dir: Option<&Path>, path: &str) -> PathBuf {
    let path = Path::new(path);
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

/// Maps scan buffer positions back to offsets in the scanned input
///
/// After an inclusion the buffer starts with included text, which has no
/// position of its own; positions there report the offset of the outermost
/// `@file://` that brought it in.
#[derive(Debug, Clone, Copy)]
struct Origin {
    /// Length of the buffer prefix that came from included files
    included: usize,
    /// Input offset reported for positions in the included prefix
    site: usize,
    /// Input offset of the first byte after the included prefix
    resume: usize,
}

impl Origin {
    fn new(base: usize) -> Self {
        Self {
            included: 0,
            site: base,
            resume: base,
        }
    }

    fn offset(&self, pos: usize) -> usize {
        if pos < self.included {
            self.site
        } else {
            self.resume + (pos - self.included)
        }
    }

    /// Origin of the buffer `content + old[end..]` after including `start..end`
    fn splice(&self, start: usize, end: usize, content_len: usize) -> Self {
        if end <= self.included {
            Self {
                included: content_len + (self.included - end),
                ..*self
            }
        } else {
            Self {
                included: content_len,
                site: self.offset(start),
                resume: self.offset(end),
            }
        }
    }

    fn relocate(&self, err: Error) -> Error {
        match err {
            Error::UnterminatedDelimiter { delimiter, offset } => Error::UnterminatedDelimiter {
                delimiter,
                offset: self.offset(offset),
            },
            other => other,
        }
    }
}

/// What an `@` at the current position turned out to be
#[derive(Debug)]
enum Step {
    /// `@@`
    Escaped,
    /// `@` that starts nothing; emitted as text
    Literal,
    /// Expression ending at byte offset `end`
    Expression { expr: Expr, end: usize },
    /// `file://` inclusion whose source text ends at `end`
    Include { path: String, end: usize },
}

/// Interpolate `input`, recursing into bracket keys through `expr`
///
/// `base` is the offset of `input` within the text the caller reports
/// errors against.
pub(crate) fn scan(ctx: &ScanContext<'_>, input: &str, base: usize) -> Result<Interpolated> {
    let mut buffer: Cow<'_, str> = Cow::Borrowed(input);
    let mut origin = Origin::new(base);
    let mut pos = 0;
    let mut builder = TreeBuilder::new();

    loop {
        let rest = &buffer[pos..];
        let Some(at) = rest.find(INTRODUCER) else {
            builder.push_str(rest);
            break;
        };
        builder.push_str(&rest[..at]);
        let start = pos + at;

        match classify(ctx, &buffer, start).map_err(|e| origin.relocate(e))? {
            Step::Escaped => {
                builder.push_char(INTRODUCER);
                pos = start + 2;
            }
            Step::Literal => {
                builder.push_char(INTRODUCER);
                pos = start + 1;
            }
            Step::Expression { expr, end } => {
                trace!("expression {expr} at offset {start}");
                builder.push_expr(expr);
                pos = end;
            }
            Step::Include { path, end } => {
                let content = ctx.read_include(&path)?;
                origin = origin.splice(start, end, content.len());
                let remainder = &buffer[end..];
                let mut spliced = String::with_capacity(content.len() + remainder.len());
                spliced.push_str(&content);
                spliced.push_str(remainder);
                buffer = Cow::Owned(spliced);
                pos = 0;
            }
        }
    }

    Ok(builder.finish())
}

/// Classify the `@` at byte offset `start` of `text`
fn classify(ctx: &ScanContext<'_>, text: &str, start: usize) -> Result<Step> {
    let after = start + INTRODUCER.len_utf8();
    match text[after..].chars().next() {
        Some(INTRODUCER) => Ok(Step::Escaped),
        Some('{') => classify_delimited(ctx, text, start, after),
        Some(c) if expr::is_name_start(c) => classify_greedy(ctx, text, after),
        _ => Ok(Step::Literal),
    }
}

/// `@{ ... }`: the body is fixed by the matching closing brace
fn classify_delimited(
    ctx: &ScanContext<'_>,
    text: &str,
    start: usize,
    open: usize,
) -> Result<Step> {
    let close = expr::find_matching(text, open, '{', '}').ok_or_else(|| {
        Error::UnterminatedDelimiter {
            delimiter: '{',
            offset: start,
        }
    })?;
    let end = close + 1;
    let raw = &text[open + 1..close];
    let body = raw.trim();
    let body_start = open + 1 + (raw.len() - raw.trim_start().len());

    if let Some(path) = body.strip_prefix(FILE_SCHEME) {
        let path = path.trim();
        if !path.is_empty() {
            return Ok(Step::Include {
                path: path.to_string(),
                end,
            });
        }
    }

    match expr::parse_expression(ctx, body, 0, Mode::Delimited, body_start)? {
        Some((expr, consumed)) if consumed == body.len() => Ok(Step::Expression { expr, end }),
        _ => Ok(Step::Literal),
    }
}

/// `@name...`: the grammar decides where the expression ends
fn classify_greedy(ctx: &ScanContext<'_>, text: &str, after: usize) -> Result<Step> {
    if let Some(path_start) = text[after..]
        .strip_prefix(FILE_SCHEME)
        .map(|_| after + FILE_SCHEME.len())
    {
        let path_end = text[path_start..]
            .find(char::is_whitespace)
            .map_or(text.len(), |i| path_start + i);
        if path_end > path_start {
            return Ok(Step::Include {
                path: text[path_start..path_end].to_string(),
                end: path_end,
            });
        }
    }

    match expr::parse_expression(ctx, text, after, Mode::Greedy, 0)? {
        Some((expr, end)) => Ok(Step::Expression { expr, end }),
        None => Ok(Step::Literal),
    }
}
